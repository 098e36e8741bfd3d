//! Tour: one candidate closed circuit over all cities.

use crate::distance::DistanceMatrix;

/// A closed tour: an ordered permutation of city indices.
///
/// The tour is always treated as a cycle — its length wraps from the last
/// city back to the first. `length` and `fitness` are cached and computed
/// at construction; after mutating the order in place, callers must call
/// [`recompute`](Tour::recompute). Fitness is `1 / (length + 1)`, a
/// monotonically decreasing transform of length used only for relative
/// ranking during selection.
///
/// # Examples
///
/// ```
/// use tsp_evolve::models::{City, Tour};
/// use tsp_evolve::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 3.0),
///     City::new(2, 4.0, 3.0),
///     City::new(3, 4.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let tour = Tour::new(vec![0, 1, 2, 3], &dm).unwrap();
/// assert!((tour.length() - 14.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
    fitness: f64,
}

impl Tour {
    /// Creates a tour from a city ordering, computing length and fitness.
    ///
    /// Returns `None` for an empty order. A one-city tour is legal and has
    /// length 0.
    pub fn new(order: Vec<usize>, distances: &DistanceMatrix) -> Option<Self> {
        if order.is_empty() {
            return None;
        }
        let mut tour = Self {
            order,
            length: 0.0,
            fitness: 0.0,
        };
        tour.recompute(distances);
        Some(tour)
    }

    /// Recalculates the cached `length` and `fitness` after an in-place
    /// reorder. Idempotent, no other side effects.
    pub fn recompute(&mut self, distances: &DistanceMatrix) {
        let n = self.order.len();
        let mut total = 0.0;
        for i in 0..n {
            let from = self.order[i];
            let to = self.order[(i + 1) % n];
            total += distances.get(from, to);
        }
        self.length = total;
        self.fitness = 1.0 / (total + 1.0);
    }

    /// The city visitation order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access to the city order.
    ///
    /// Callers must [`recompute`](Tour::recompute) afterwards or the cached
    /// length and fitness go stale.
    pub fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Total closed-tour length, wrapping last city back to the first.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Selection fitness, `1 / (length + 1)`. Higher is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns true if the order is a permutation of `0..n`.
    ///
    /// Used by tests and debug assertions; a tour failing this check after
    /// crossover or mutation indicates a bug in the engine.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.order {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}
