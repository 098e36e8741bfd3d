//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a chosen city, always visit the
//! nearest unvisited city next. Deterministic for a fixed distance matrix
//! and start index — ties are broken by ascending city index (first found
//! wins).
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.

use crate::distance::DistanceMatrix;

/// Constructs a tour ordering using the nearest-neighbor heuristic.
///
/// # Arguments
///
/// * `distances` — Distance matrix over all cities
/// * `start` — Index of the city the tour begins at
///
/// # Panics
///
/// Panics if `start` is out of bounds for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use tsp_evolve::models::City;
/// use tsp_evolve::distance::DistanceMatrix;
/// use tsp_evolve::constructive::nearest_neighbor;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 10.0, 0.0),
///     City::new(2, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// // From city 0, the nearer city 2 is visited before city 1.
/// assert_eq!(nearest_neighbor(&dm, 0), vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }
    assert!(start < n, "start index {start} out of bounds for {n} cities");

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    order.push(current);

    while order.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            let d = distances.get(current, i);
            // Strict < keeps the lowest-index city on ties
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((i, d));
            }
        }
        let (next, _) = best.expect("unvisited city must exist");
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}
