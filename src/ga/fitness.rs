//! Constraint-violation scoring.
//!
//! The score of a grid is the number of excess digit occurrences summed
//! over all 27 units (9 rows, 9 columns, 9 blocks): a digit appearing
//! `k` times in a unit contributes `k - 1`. Zero means every unit is a
//! permutation of 1–9, i.e. a valid solution.
//!
//! This is a pure full recount on every call, and the dominant
//! per-individual cost of the search: candidates are replaced wholesale
//! each generation, so there is no structure to update incrementally.

use crate::grid::{Grid, BLOCK, SIZE};
use crate::ga::types::Fitness;

/// Scores a fully filled grid; 0 means solved.
pub fn evaluate(grid: &Grid) -> Fitness {
    let mut score = 0;

    for row in 0..SIZE {
        let mut counts = [0u32; SIZE + 1];
        for col in 0..SIZE {
            counts[grid.get(row, col) as usize] += 1;
        }
        score += excess(&counts);
    }

    for col in 0..SIZE {
        let mut counts = [0u32; SIZE + 1];
        for row in 0..SIZE {
            counts[grid.get(row, col) as usize] += 1;
        }
        score += excess(&counts);
    }

    for block_row in 0..BLOCK {
        for block_col in 0..BLOCK {
            let mut counts = [0u32; SIZE + 1];
            for x in 0..BLOCK {
                for y in 0..BLOCK {
                    let digit = grid.get(BLOCK * block_row + x, BLOCK * block_col + y);
                    counts[digit as usize] += 1;
                }
            }
            score += excess(&counts);
        }
    }

    score
}

/// Sum of `k - 1` over the digits 1–9 occurring `k >= 1` times.
fn excess(counts: &[u32; SIZE + 1]) -> Fitness {
    counts[1..].iter().map(|&k| k.saturating_sub(1)).sum()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::testutil::solved_grid;
    use proptest::prelude::*;

    #[test]
    fn test_solved_grid_scores_zero() {
        assert_eq!(evaluate(&solved_grid()), 0);
    }

    #[test]
    fn test_uniform_grid_scores_maximum() {
        // Every unit holds one digit nine times: 8 excess × 27 units.
        let grid = Grid::from_cells([[1; SIZE]; SIZE]);
        assert_eq!(evaluate(&grid), 216);
    }

    #[test]
    fn test_in_row_swap_across_blocks_costs_four() {
        // Swapping two cells of a valid grid within one row leaves the
        // row a permutation but breaks two columns; with the cells in
        // different blocks it breaks both blocks too.
        let mut grid = solved_grid();
        grid.swap_in_row(0, 0, 8);
        assert_eq!(evaluate(&grid), 4);
    }

    #[test]
    fn test_in_row_swap_within_block_costs_two() {
        // Both cells in the same block: the block's content is unchanged,
        // only the two columns break.
        let mut grid = solved_grid();
        grid.swap_in_row(0, 0, 1);
        assert_eq!(evaluate(&grid), 2);
    }

    #[test]
    fn test_row_swap_within_band_preserves_fitness() {
        // Swapping whole rows inside one band permutes unit contents
        // without changing any unit's multiset, for any grid.
        let mut grid = solved_grid();
        grid.swap_in_row(4, 2, 7); // make it non-trivially imperfect
        let before = evaluate(&grid);

        let mut swapped = grid;
        for col in 0..SIZE {
            let a = swapped.get(0, col);
            let b = swapped.get(1, col);
            swapped.set(0, col, b);
            swapped.set(1, col, a);
        }
        assert_eq!(evaluate(&swapped), before);
    }

    #[test]
    fn test_row_swap_across_bands_changes_fitness() {
        // Moving a row into another band changes block composition; for
        // a solved grid this must introduce violations.
        let mut grid = solved_grid();
        for col in 0..SIZE {
            let a = grid.get(0, col);
            let b = grid.get(3, col);
            grid.set(0, col, b);
            grid.set(3, col, a);
        }
        assert!(evaluate(&grid) > 0);
    }

    proptest! {
        /// Relabeling digits by a permutation maps valid grids to valid
        /// grids; the score stays zero.
        #[test]
        fn prop_digit_relabel_keeps_zero(
            perm in Just((1..=9u8).collect::<Vec<u8>>()).prop_shuffle(),
        ) {
            let base = solved_grid();
            let mut relabeled = base;
            for r in 0..SIZE {
                for c in 0..SIZE {
                    relabeled.set(r, c, perm[(base.get(r, c) - 1) as usize]);
                }
            }
            prop_assert_eq!(evaluate(&relabeled), 0);
        }

        /// Overwriting one cell of a valid grid with a different digit
        /// always produces a positive score.
        #[test]
        fn prop_single_cell_corruption_is_positive(
            r in 0..SIZE,
            c in 0..SIZE,
            bump in 1..9u8,
        ) {
            let mut grid = solved_grid();
            let old = grid.get(r, c);
            let new = (old - 1 + bump) % 9 + 1;
            grid.set(r, c, new);
            prop_assert!(evaluate(&grid) > 0);
        }
    }
}
