//! Variation operators: whole-row crossover and in-row swap mutation.
//!
//! Both operators work at row granularity so the per-row permutation
//! property survives them transitively: crossover copies entire rows
//! from parents that already satisfy it, and mutation swaps two free
//! cells within a single row. Neither touches fixed cells.
//!
//! Both leave the affected individual's fitness invalidated; the caller
//! evaluates once the structural changes are done.

use rand::Rng;

use crate::ga::types::Individual;
use crate::grid::{FixedMask, SIZE};

/// Breeds a child by copying each row from either parent with equal
/// probability.
///
/// Parents must stem from the same puzzle so their fixed cells agree.
/// The child is unevaluated.
pub fn row_crossover<R: Rng>(
    parent_a: &Individual,
    parent_b: &Individual,
    rng: &mut R,
) -> Individual {
    let mut grid = *parent_a.grid();
    for row in 0..SIZE {
        if rng.random_bool(0.5) {
            grid.copy_row_from(parent_b.grid(), row);
        }
    }
    Individual::new(grid)
}

/// Swaps two distinct free cells in one uniformly chosen row.
///
/// If the chosen row has fewer than two free cells the call is a no-op
/// (the individual's fitness is left untouched in that case).
pub fn swap_mutation<R: Rng>(individual: &mut Individual, fixed: &FixedMask, rng: &mut R) {
    let row = rng.random_range(0..SIZE);
    let free: Vec<usize> = fixed.free_in_row(row).collect();
    if free.len() < 2 {
        return;
    }

    let first = rng.random_range(0..free.len());
    let mut second = rng.random_range(0..free.len());
    while second == first {
        second = rng.random_range(0..free.len());
    }

    individual
        .grid_mut()
        .swap_in_row(row, free[first], free[second]);
    individual.invalidate_fitness();
}

// ============================================================================
// Tests
// ============================================================================
