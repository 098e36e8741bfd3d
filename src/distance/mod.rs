//! Distance computation.
//!
//! Provides a dense Euclidean distance matrix built from city coordinates.

mod matrix;

pub use matrix::DistanceMatrix;
