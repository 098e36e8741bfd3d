//! # tsp-evolve
//!
//! Genetic-algorithm heuristic solver for the Euclidean Traveling Salesman
//! Problem: evolves a population of candidate closed tours over a set of 2D
//! cities to minimize total tour length. The host application supplies
//! cities and start/stop/reset/step commands and reads immutable snapshots
//! of solver state once per tick; rendering and UI concerns live entirely
//! outside this crate.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`population`] — Fixed-capacity population of tours with aggregate stats
//! - [`constructive`] — Heuristic seeders (nearest neighbor, greedy edge matching)
//! - [`engine`] — Evolution step, stagnation tracking, and the solver facade
//! - [`config`] — Solver configuration with documented defaults
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tsp_evolve::engine::TspSolver;
//!
//! let mut solver = TspSolver::with_defaults(StdRng::seed_from_u64(7));
//! solver.add_city(0.0, 0.0, Some("A"));
//! solver.add_city(3.0, 0.0, Some("B"));
//! solver.add_city(3.0, 4.0, Some("C"));
//!
//! solver.start()?;
//! while solver.generation() < 50 {
//!     solver.step();
//! }
//! solver.stop();
//!
//! let snapshot = solver.snapshot();
//! assert!((snapshot.best.unwrap().length - 12.0).abs() < 1e-9);
//! # Ok::<(), tsp_evolve::error::SolverError>(())
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod engine;
pub mod error;
pub mod models;
pub mod population;
