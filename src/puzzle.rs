//! Puzzle input: parsing and given-consistency validation.
//!
//! A [`Puzzle`] couples the given digits with the [`FixedMask`] derived
//! from them. Parsing accepts 81 whitespace-delimited tokens, each a
//! digit `1`–`9` or a blank marker (`0` or `-`), and rejects puzzles
//! whose givens already repeat a digit within a row, column, or block:
//! such input has no valid completion, and a duplicate within a row
//! would additionally desynchronize the per-row free-digit construction
//! used to seed the population.

use std::str::FromStr;

use crate::error::ParseError;
use crate::grid::{FixedMask, Grid, BLOCK, SIZE};

/// An immutable Sudoku puzzle: the given digits plus their fixed-cell mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    givens: Grid,
    fixed: FixedMask,
}

impl Puzzle {
    /// Builds a puzzle from a grid of givens (0 = blank), rejecting
    /// contradictory givens.
    pub fn from_grid(givens: Grid) -> Result<Self, ParseError> {
        check_givens(&givens)?;
        let fixed = FixedMask::from_grid(&givens);
        Ok(Self { givens, fixed })
    }

    /// Parses 81 whitespace-delimited cell tokens.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() != SIZE * SIZE {
            return Err(ParseError::CellCount {
                found: tokens.len(),
            });
        }

        let mut cells = [[0u8; SIZE]; SIZE];
        for (position, token) in tokens.iter().enumerate() {
            let value = match *token {
                "-" | "0" => 0,
                d if d.len() == 1 && d.as_bytes()[0].is_ascii_digit() => d.as_bytes()[0] - b'0',
                _ => {
                    return Err(ParseError::InvalidToken {
                        token: (*token).to_string(),
                        position,
                    })
                }
            };
            cells[position / SIZE][position % SIZE] = value;
        }

        Self::from_grid(Grid::from_cells(cells))
    }

    /// The given digits (0 = blank).
    pub fn givens(&self) -> &Grid {
        &self.givens
    }

    /// Which cells are fixed by the givens.
    pub fn fixed(&self) -> &FixedMask {
        &self.fixed
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Rejects givens that repeat a digit within any row, column, or block.
fn check_givens(givens: &Grid) -> Result<(), ParseError> {
    for row in 0..SIZE {
        let mut seen = [false; SIZE + 1];
        for col in 0..SIZE {
            let digit = givens.get(row, col);
            if digit == 0 {
                continue;
            }
            if seen[digit as usize] {
                return Err(ParseError::ContradictoryGivens {
                    digit,
                    unit: format!("row {row}"),
                });
            }
            seen[digit as usize] = true;
        }
    }

    for col in 0..SIZE {
        let mut seen = [false; SIZE + 1];
        for row in 0..SIZE {
            let digit = givens.get(row, col);
            if digit == 0 {
                continue;
            }
            if seen[digit as usize] {
                return Err(ParseError::ContradictoryGivens {
                    digit,
                    unit: format!("column {col}"),
                });
            }
            seen[digit as usize] = true;
        }
    }

    for block_row in 0..BLOCK {
        for block_col in 0..BLOCK {
            let mut seen = [false; SIZE + 1];
            for x in 0..BLOCK {
                for y in 0..BLOCK {
                    let digit = givens.get(BLOCK * block_row + x, BLOCK * block_col + y);
                    if digit == 0 {
                        continue;
                    }
                    if seen[digit as usize] {
                        return Err(ParseError::ContradictoryGivens {
                            digit,
                            unit: format!("block ({block_row}, {block_col})"),
                        });
                    }
                    seen[digit as usize] = true;
                }
            }
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
