//! Row-wise random candidate construction.
//!
//! Every produced individual has each row equal to a permutation of 1–9
//! with the fixed cells untouched: the digits missing from a row's
//! givens are dealt onto its free cells in uniformly random order. Rows
//! are correct by construction; columns and blocks are whatever the deal
//! happens to produce, and repairing them is the search's job.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ga::types::Individual;
use crate::grid::SIZE;
use crate::puzzle::Puzzle;

/// Creates one random individual respecting the puzzle's fixed cells.
///
/// The returned individual is unevaluated.
pub fn random_individual<R: Rng>(puzzle: &Puzzle, rng: &mut R) -> Individual {
    let mut grid = *puzzle.givens();

    for row in 0..SIZE {
        // Digits not given anywhere in this row. Given-consistency
        // validation guarantees there are exactly as many as free cells.
        let mut free_digits: Vec<u8> =
            (1..=9).filter(|d| !grid.row(row).contains(d)).collect();
        free_digits.shuffle(rng);

        let mut next = 0;
        for col in 0..SIZE {
            if !puzzle.fixed().is_fixed(row, col) {
                grid.set(row, col, free_digits[next]);
                next += 1;
            }
        }
    }

    Individual::new(grid)
}

// ============================================================================
// Tests
// ============================================================================
