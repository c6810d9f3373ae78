//! Error types.
//!
//! The taxonomy is deliberately narrow: puzzle text that cannot be
//! parsed or contradicts itself ([`ParseError`]), and GA parameters that
//! cannot produce a runnable search ([`ConfigError`]). Both fail fast,
//! before the engine does any work. Non-convergence within the
//! generation budget is *not* an error; it is reported as
//! [`Termination::Exhausted`](crate::ga::Termination::Exhausted)
//! together with the best candidate found.

use thiserror::Error;

/// Failure to turn puzzle text into a [`Puzzle`](crate::puzzle::Puzzle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input did not contain exactly 81 cell tokens.
    #[error("puzzle must contain 81 cells, found {found}")]
    CellCount {
        /// Number of whitespace-delimited tokens seen.
        found: usize,
    },

    /// A token was not a digit `1`–`9` or a blank marker (`0` or `-`).
    #[error("invalid cell token `{token}` at position {position}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Zero-based index of the token in row-major order.
        position: usize,
    },

    /// The givens already repeat a digit within one row, column, or block,
    /// so no valid completion exists.
    #[error("puzzle gives digit {digit} more than once in {unit}")]
    ContradictoryGivens {
        /// The repeated digit.
        digit: u8,
        /// Human-readable unit, e.g. `row 3` or `block (0, 2)`.
        unit: String,
    },
}

/// Unsatisfiable GA parameters, detected by
/// [`GaConfig::validate`](crate::ga::GaConfig::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Fewer than two individuals cannot breed.
    #[error("population_size must be at least 2, got {got}")]
    PopulationTooSmall {
        /// The configured population size.
        got: usize,
    },

    /// The elite pool supplies all crossover parents, so it must hold at
    /// least one individual and cannot exceed the population.
    #[error("elitism_count must be between 1 and population_size ({population_size}), got {got}")]
    ElitismOutOfRange {
        /// The configured elite count.
        got: usize,
        /// The configured population size.
        population_size: usize,
    },

    /// A zero generation budget would return without searching.
    #[error("generations must be at least 1")]
    ZeroGenerations,

    /// A zero stagnation limit would restart on every generation.
    #[error("max_stagnation must be at least 1")]
    ZeroStagnation,

    /// Probability outside [0, 1]; only reachable by constructing the
    /// config directly, the builder clamps.
    #[error("mutation_chance must be within [0, 1], got {got}")]
    MutationChanceOutOfRange {
        /// The configured mutation probability.
        got: f64,
    },
}
