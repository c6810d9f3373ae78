//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the genetic search.
///
/// # Defaults
///
/// The defaults are the reference parameters tuned for hard 9×9 puzzles:
///
/// ```
/// use sudoku_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.elitism_count, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use sudoku_evo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elitism_count(100)
///     .with_mutation_chance(0.8)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Larger populations increase diversity but slow down each
    /// generation. Must be at least 2.
    pub population_size: usize,

    /// Hard cap on the number of generations (restart generations
    /// included) before the search gives up.
    pub generations: usize,

    /// Generations without a strictly better best fitness before the
    /// entire population is regenerated from scratch.
    pub max_stagnation: usize,

    /// Probability in [0, 1] that a freshly bred child is mutated.
    pub mutation_chance: f64,

    /// Number of top individuals preserved verbatim each generation.
    ///
    /// The elite pool is also the only source of crossover parents.
    /// Must be between 1 and `population_size`.
    pub elitism_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            generations: 100_000,
            max_stagnation: 100,
            mutation_chance: 0.9,
            elitism_count: 500,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_stagnation(mut self, n: usize) -> Self {
        self.max_stagnation = n;
        self
    }

    /// Sets the mutation probability, clamped into [0, 1].
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite count.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset with a small budget, suitable for tests, benchmarks, and
    /// easy puzzles.
    ///
    /// - Population: 200, Generations: 1000
    /// - Stagnation limit: 30, Mutation: 0.9, Elites: 100
    pub fn fast() -> Self {
        Self {
            population_size: 200,
            generations: 1000,
            max_stagnation: 30,
            elitism_count: 100,
            ..Self::default()
        }
    }

    /// Preset with a wide population and a tight stagnation limit,
    /// tuned for solve-rate on hard puzzles.
    ///
    /// - Population: 2000, Generations: 5000
    /// - Stagnation limit: 50, Mutation: 0.9, Elites: 1000
    pub fn thorough() -> Self {
        Self {
            population_size: 2000,
            generations: 5000,
            max_stagnation: 50,
            elitism_count: 1000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                got: self.population_size,
            });
        }
        if self.elitism_count == 0 || self.elitism_count > self.population_size {
            return Err(ConfigError::ElitismOutOfRange {
                got: self.elitism_count,
                population_size: self.population_size,
            });
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.max_stagnation == 0 {
            return Err(ConfigError::ZeroStagnation);
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(ConfigError::MutationChanceOutOfRange {
                got: self.mutation_chance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 1000);
        assert_eq!(config.generations, 100_000);
        assert_eq!(config.max_stagnation, 100);
        assert!((config.mutation_chance - 0.9).abs() < 1e-10);
        assert_eq!(config.elitism_count, 500);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(64)
            .with_generations(250)
            .with_max_stagnation(10)
            .with_mutation_chance(0.5)
            .with_elitism_count(8)
            .with_seed(42);

        assert_eq!(config.population_size, 64);
        assert_eq!(config.generations, 250);
        assert_eq!(config.max_stagnation, 10);
        assert!((config.mutation_chance - 0.5).abs() < 1e-10);
        assert_eq!(config.elitism_count, 8);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_mutation_chance_clamped() {
        let config = GaConfig::default().with_mutation_chance(1.5);
        assert!((config.mutation_chance - 1.0).abs() < 1e-10);
        let config = GaConfig::default().with_mutation_chance(-0.5);
        assert!((config.mutation_chance - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default()
            .with_population_size(1)
            .with_elitism_count(1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PopulationTooSmall { got: 1 })
        ));
    }

    #[test]
    fn test_validate_elitism_bounds() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elitism_count(11);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ElitismOutOfRange { got: 11, .. })
        ));

        let config = GaConfig::default().with_elitism_count(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ElitismOutOfRange { got: 0, .. })
        ));

        // The full population may be elite; breeding then degenerates to
        // copy-through, which is legal.
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elitism_count(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_zero_stagnation() {
        let config = GaConfig::default().with_max_stagnation(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroStagnation));
    }

    #[test]
    fn test_validate_mutation_chance_range() {
        let config = GaConfig {
            mutation_chance: 1.2,
            ..GaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MutationChanceOutOfRange { .. })
        ));
    }

    #[test]
    fn test_presets_validate() {
        assert!(GaConfig::fast().validate().is_ok());
        assert!(GaConfig::thorough().validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::fast().with_seed(7);
        assert_eq!(config.population_size, 200);
        assert_eq!(config.seed, Some(7));
    }
}
