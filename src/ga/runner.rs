//! The evolutionary loop.
//!
//! [`GaRunner`] orchestrates the search: initialization → (sort →
//! solved check → stagnation bookkeeping → restart or breed) per
//! generation, until a solution appears or the generation budget runs
//! out. Breeding copies the elite pool verbatim and fills the remaining
//! slots with crossover children of uniformly chosen elite parents,
//! each mutated with the configured probability.
//!
//! The loop is one synchronous computation: no I/O, no threads, no
//! blocking. The only external bound is the `generations` budget, which
//! caps total loop iterations (a stagnation restart consumes a
//! generation like any other).

use log::{debug, trace};
use rand::Rng;

use crate::error::ConfigError;
use crate::ga::config::GaConfig;
use crate::ga::fitness::evaluate;
use crate::ga::operators::{row_crossover, swap_mutation};
use crate::ga::population::Population;
use crate::ga::types::{Fitness, Individual};
use crate::puzzle::Puzzle;
use crate::random::create_rng;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A zero-violation individual was found.
    Solved,
    /// The generation budget ran out before a solution appeared.
    Exhausted,
}

/// Result of a run: the best individual found plus statistics.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual observed during the entire run, restarts included.
    ///
    /// Fully filled even when the run exhausted its budget.
    pub best: Individual,

    /// Fitness of [`best`](Self::best); 0 iff solved.
    pub best_fitness: Fitness,

    /// Number of generations executed (0 when the initial population
    /// already contained a solution).
    pub generations: usize,

    /// Number of stagnation-triggered population restarts.
    pub restarts: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best-ever fitness after initialization and after each generation.
    ///
    /// Monotonically non-increasing, even across restarts.
    pub fitness_history: Vec<Fitness>,
}

impl GaResult {
    /// True when the run found a valid solution.
    pub fn is_solved(&self) -> bool {
        self.termination == Termination::Solved
    }
}

/// Stagnation tracking and generation accounting, reset on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunState {
    best_fitness_seen: Fitness,
    stagnation_counter: usize,
    generation_index: usize,
}

impl RunState {
    fn new(best_fitness_seen: Fitness) -> Self {
        Self {
            best_fitness_seen,
            stagnation_counter: 0,
            generation_index: 0,
        }
    }

    /// Records one generation's best fitness: a strict improvement
    /// resets the stagnation counter, anything else increments it.
    fn observe(&mut self, current: Fitness) {
        if current < self.best_fitness_seen {
            self.best_fitness_seen = current;
            self.stagnation_counter = 0;
        } else {
            self.stagnation_counter += 1;
        }
    }

    fn is_stagnant(&self, limit: usize) -> bool {
        self.stagnation_counter >= limit
    }

    /// Re-baselines against a freshly regenerated population.
    fn reset_after_restart(&mut self, best_fitness: Fitness) {
        self.best_fitness_seen = best_fitness;
        self.stagnation_counter = 0;
    }
}

/// Executes the genetic search.
///
/// # Usage
///
/// ```
/// use sudoku_evo::ga::{GaConfig, GaRunner};
/// use sudoku_evo::puzzle::Puzzle;
///
/// let puzzle = Puzzle::parse(&"- ".repeat(81)).unwrap();
/// let config = GaConfig::fast().with_generations(5).with_seed(42);
/// let result = GaRunner::run(&puzzle, &config).unwrap();
/// assert_eq!(result.fitness_history.len(), result.generations + 1);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the search, seeding the RNG from the configuration.
    pub fn run(puzzle: &Puzzle, config: &GaConfig) -> Result<GaResult, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(puzzle, config, &mut rng)
    }

    /// Runs the search with a caller-supplied RNG.
    ///
    /// The run is deterministic in the RNG stream, which makes every
    /// outcome reproducible from a seed.
    pub fn run_with_rng<R: Rng>(
        puzzle: &Puzzle,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, ConfigError> {
        config.validate()?;

        let mut population = Population::random(puzzle, config.population_size, rng);
        population.sort_by_fitness();

        let mut best = population.best().clone();
        let mut state = RunState::new(best.fitness());
        let mut restarts = 0usize;
        let mut fitness_history = vec![best.fitness()];

        // Invariant at the top of each iteration: `population` is sorted
        // and `best` already reflects it.
        loop {
            if best.fitness() == 0 {
                return Ok(GaResult {
                    best_fitness: 0,
                    best,
                    generations: state.generation_index,
                    restarts,
                    termination: Termination::Solved,
                    fitness_history,
                });
            }

            state.observe(population.best().fitness());

            if state.is_stagnant(config.max_stagnation) {
                debug!(
                    "generation {}: no improvement in {} generations, restarting population",
                    state.generation_index, state.stagnation_counter
                );
                restarts += 1;
                population = Population::random(puzzle, config.population_size, rng);
                state.reset_after_restart(population.min_fitness());
            } else {
                population = breed(&population, puzzle, config, rng);
            }

            population.sort_by_fitness();
            if population.best().fitness() < best.fitness() {
                best = population.best().clone();
            }

            state.generation_index += 1;
            fitness_history.push(best.fitness());
            trace!(
                "generation {}: best-ever fitness {}",
                state.generation_index,
                best.fitness()
            );

            if best.fitness() > 0 && state.generation_index >= config.generations {
                return Ok(GaResult {
                    best_fitness: best.fitness(),
                    best,
                    generations: state.generation_index,
                    restarts,
                    termination: Termination::Exhausted,
                    fitness_history,
                });
            }
        }
    }
}

/// Builds the next generation from a sorted population: the elite pool
/// verbatim, then crossover children of uniformly chosen elite parents.
fn breed<R: Rng>(
    population: &Population,
    puzzle: &Puzzle,
    config: &GaConfig,
    rng: &mut R,
) -> Population {
    let members = population.as_slice();
    let mut next: Vec<Individual> = members[..config.elitism_count].to_vec();

    while next.len() < config.population_size {
        let a = rng.random_range(0..config.elitism_count);
        let b = rng.random_range(0..config.elitism_count);
        let mut child = row_crossover(&members[a], &members[b], rng);
        if rng.random_range(0.0..1.0) < config.mutation_chance {
            swap_mutation(&mut child, puzzle.fixed(), rng);
        }
        child.set_fitness(evaluate(child.grid()));
        next.push(child);
    }

    Population::from_members(next)
}

// ============================================================================
// Tests
// ============================================================================
