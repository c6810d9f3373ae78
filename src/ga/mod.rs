//! The genetic search engine.
//!
//! A specialized elitist GA over per-row permutation candidates. The
//! puzzle defines the fixed cells; every individual keeps each row a
//! permutation of 1–9 by construction, so fitness only ever counts
//! column and block violations on top of row-valid candidates.
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters (population size, budgets, rates)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: final outcome with statistics
//! - [`Individual`] / [`Population`]: candidate storage
//!
//! # Submodules
//!
//! - [`fitness`]: constraint-violation scoring
//! - [`factory`]: row-wise random candidate construction
//! - [`operators`]: whole-row crossover and in-row swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Mantere & Koljonen (2007), *Solving, Rating and Generating Sudoku
//!   Puzzles with GA*

mod config;
pub mod factory;
pub mod fitness;
pub mod operators;
mod population;
mod runner;
mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::GaConfig;
pub use population::Population;
pub use runner::{GaResult, GaRunner, Termination};
pub use types::{Fitness, Individual};
