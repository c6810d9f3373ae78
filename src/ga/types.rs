//! Candidate solution storage.
//!
//! An [`Individual`] owns its grid exclusively; populations never alias
//! storage between members. Fitness is memoized on the individual:
//! construction and structural modification leave it at
//! [`Individual::UNEVALUATED`], which orders after every real value, so
//! an unevaluated individual can never masquerade as a good one.

use crate::grid::Grid;

/// Constraint-violation count; lower is better, 0 means solved.
///
/// The theoretical maximum is 216 (8 excess occurrences in each of the
/// 27 units).
pub type Fitness = u32;

/// One candidate solution: a fully filled grid plus its memoized fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    grid: Grid,
    fitness: Fitness,
}

impl Individual {
    /// Sentinel fitness for individuals that have not been evaluated
    /// since their last structural change.
    pub const UNEVALUATED: Fitness = Fitness::MAX;

    /// Wraps a grid as an unevaluated individual.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            fitness: Self::UNEVALUATED,
        }
    }

    /// The candidate grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for the variation operators; the caller must
    /// invalidate or recompute fitness afterwards.
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The memoized fitness ([`Self::UNEVALUATED`] if stale).
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    /// Stores the fitness computed for the current grid.
    pub fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = fitness;
    }

    /// Marks the memoized fitness stale.
    pub(crate) fn invalidate_fitness(&mut self) {
        self.fitness = Self::UNEVALUATED;
    }

    /// True once an evaluation reported zero violations.
    pub fn is_solution(&self) -> bool {
        self.fitness == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_new_individual_is_unevaluated() {
        let ind = Individual::new(Grid::from_cells([[1; 9]; 9]));
        assert_eq!(ind.fitness(), Individual::UNEVALUATED);
        assert!(!ind.is_solution());
    }

    #[test]
    fn test_set_fitness_memoizes() {
        let mut ind = Individual::new(Grid::from_cells([[1; 9]; 9]));
        ind.set_fitness(12);
        assert_eq!(ind.fitness(), 12);
        ind.invalidate_fitness();
        assert_eq!(ind.fitness(), Individual::UNEVALUATED);
    }

    #[test]
    fn test_zero_fitness_is_solution() {
        let mut ind = Individual::new(Grid::from_cells([[1; 9]; 9]));
        ind.set_fitness(0);
        assert!(ind.is_solution());
    }

    #[test]
    fn test_unevaluated_orders_after_any_real_fitness() {
        assert!(Individual::UNEVALUATED > 216);
    }
}
