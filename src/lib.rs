//! Genetic-algorithm Sudoku solver.
//!
//! Solves 9×9 Sudoku puzzles with a stochastic, elitist genetic search
//! instead of exact constraint propagation:
//!
//! - **Per-row permutation encoding**: every candidate keeps each row a
//!   permutation of 1–9 by construction, so the search only has to repair
//!   column and block violations.
//! - **Elitist evolution**: the best individuals survive each generation
//!   unchanged and serve as the parent pool for whole-row crossover.
//! - **Stagnation restarts**: when the best fitness stops improving for
//!   too many generations, the entire population is regenerated.
//!
//! # Quick start
//!
//! ```
//! use sudoku_evo::ga::{GaConfig, GaRunner};
//! use sudoku_evo::puzzle::Puzzle;
//!
//! let puzzle: Puzzle = "
//!     - 2 3 4 5 6 7 8 9
//!     4 5 6 7 8 9 1 2 3
//!     7 8 9 1 2 3 4 5 6
//!     2 3 4 5 6 7 8 9 1
//!     5 6 7 8 9 1 2 3 4
//!     8 9 1 2 3 4 5 6 7
//!     3 4 5 6 7 8 9 1 2
//!     6 7 8 9 1 2 3 4 5
//!     9 1 2 3 4 5 6 7 -
//! ".parse().unwrap();
//!
//! let config = GaConfig::fast().with_seed(42);
//! let result = GaRunner::run(&puzzle, &config).unwrap();
//! assert!(result.is_solved());
//! println!("{}", result.best.grid());
//! ```
//!
//! The search is randomized and not guaranteed to converge within the
//! configured generation budget; a run that exhausts its budget still
//! returns the best candidate found (see [`ga::Termination`]).

pub mod error;
pub mod ga;
pub mod grid;
pub mod puzzle;
pub mod random;
