//! Constructive heuristics for seeding the initial population.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour from a start city, O(n²)
//! - [`greedy_edge`] — Greedy edge-matching over distance-sorted city pairs, O(n² log n)
//!
//! Seed tours occupy the first slots of the initial population; the
//! remaining slots are filled with uniformly random permutations.

mod greedy_edge;
mod nearest_neighbor;

pub use greedy_edge::greedy_edge;
pub use nearest_neighbor::nearest_neighbor;
