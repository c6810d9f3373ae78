//! Population storage.
//!
//! An ordered, owned collection of individuals. The engine replaces the
//! whole container each generation (building the next generation into a
//! fresh `Vec` and moving it into place), so members are never aliased
//! between the population being read and the one being built.

use rand::Rng;

use crate::ga::factory::random_individual;
use crate::ga::fitness::evaluate;
use crate::ga::types::{Fitness, Individual};
use crate::puzzle::Puzzle;

/// A fixed-size collection of candidate solutions.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// Builds `size` fresh random individuals and evaluates each.
    ///
    /// Used both for initialization and for stagnation restarts.
    pub fn random<R: Rng>(puzzle: &Puzzle, size: usize, rng: &mut R) -> Self {
        let members = (0..size)
            .map(|_| {
                let mut ind = random_individual(puzzle, rng);
                ind.set_fitness(evaluate(ind.grid()));
                ind
            })
            .collect();
        Self { members }
    }

    /// Wraps an already-built generation.
    pub(crate) fn from_members(members: Vec<Individual>) -> Self {
        Self { members }
    }

    /// Sorts ascending by fitness (best first). Ties in any order.
    pub fn sort_by_fitness(&mut self) {
        self.members.sort_unstable_by_key(Individual::fitness);
    }

    /// The best individual. Meaningful after [`Self::sort_by_fitness`].
    pub fn best(&self) -> &Individual {
        &self.members[0]
    }

    /// The lowest fitness currently present, in any order.
    pub fn min_fitness(&self) -> Fitness {
        self.members
            .iter()
            .map(Individual::fitness)
            .min()
            .expect("population is never empty")
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates the members in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.members.iter()
    }

    /// The members in their current order.
    pub fn as_slice(&self) -> &[Individual] {
        &self.members
    }
}

// ============================================================================
// Tests
// ============================================================================
