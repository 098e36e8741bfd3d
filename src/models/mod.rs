//! Domain model types for the TSP solver.
//!
//! Provides the core abstractions: cities as immutable 2D points, and tours
//! as closed-cycle permutations of the city set with cached length and
//! fitness.

mod city;
mod tour;

pub use city::City;
pub use tour::Tour;
