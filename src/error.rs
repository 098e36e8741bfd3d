//! Error types for tsp-evolve.
//!
//! Recoverable preconditions (too few cities, uninitialized population) are
//! reported as `Err` values for the host to surface. Internal invariant
//! violations (an invalid permutation after crossover, an unfilled
//! population) are programming faults and are asserted, not returned.

use thiserror::Error;

/// Result type alias for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Error type for all solver operations.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The solver was asked to start before enough cities were added.
    #[error("at least {required} cities are required to start, have {actual}")]
    NotEnoughCities {
        /// Minimum number of cities needed to evolve a population.
        required: usize,
        /// Number of cities currently added.
        actual: usize,
    },

    /// A population query was made before the population was initialized.
    #[error("population is not initialized")]
    NotReady,

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

impl SolverError {
    /// Creates a configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
