//! Evolution engine.
//!
//! - [`operators`] — Tournament selection, order crossover, swap/invert mutation
//! - [`evolve`] — One generation step: elitism, reproduction, fitness recomputation
//! - [`StagnationTracker`] — Best-ever tracking and stagnation-adaptive mutation rate
//! - [`TspSolver`] — Host-facing facade: city list, run state machine, snapshots

mod evolution;
pub mod operators;
mod solver;
mod stagnation;

pub use evolution::evolve;
pub use solver::{SolverSnapshot, SolverState, TourSummary, TspSolver};
pub use stagnation::StagnationTracker;
