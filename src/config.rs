//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Genetic algorithm parameters, fixed at solver construction.
///
/// # Defaults
///
/// | Parameter        | Default |
/// |------------------|---------|
/// | `population_size`| 200     |
/// | `elite_size`     | 2       |
/// | `tournament_size`| 5       |
/// | `crossover_rate` | 0.95    |
/// | `mutation_rate`  | 0.015   |
///
/// # Examples
///
/// ```
/// use tsp_evolve::config::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_population_size(50)
///     .with_elite_size(4);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.population_size, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Number of tours per generation.
    pub population_size: usize,
    /// Number of best tours carried unchanged into the next generation.
    pub elite_size: usize,
    /// Number of members sampled (with replacement) per tournament.
    pub tournament_size: usize,
    /// Probability that a child is produced by order crossover rather than
    /// copied from its first parent.
    pub crossover_rate: f64,
    /// Base per-generation mutation rate, before stagnation scaling.
    pub mutation_rate: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            elite_size: 2,
            tournament_size: 5,
            crossover_rate: 0.95,
            mutation_rate: 0.015,
        }
    }
}

impl SolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_size(mut self, size: usize) -> Self {
        self.elite_size = size;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the base mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Validates parameter bounds.
    ///
    /// The population must have room for the three heuristic seeds, the
    /// elites must leave at least one slot for reproduction, tournaments
    /// need at least one entrant, and both rates must be probabilities.
    pub fn validate(&self) -> SolverResult<()> {
        if self.population_size < 3 {
            return Err(SolverError::config(
                "population size must be at least 3 to hold the heuristic seeds",
            ));
        }
        if self.elite_size >= self.population_size {
            return Err(SolverError::config(format!(
                "elite size {} must be less than population size {}",
                self.elite_size, self.population_size
            )));
        }
        if self.tournament_size == 0 {
            return Err(SolverError::config("tournament size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(SolverError::config(format!(
                "crossover rate {} must be in [0, 1]",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) || !self.mutation_rate.is_finite() {
            return Err(SolverError::config(format!(
                "mutation rate {} must be in [0, 1]",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
