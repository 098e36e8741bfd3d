//! Fixed-capacity population of tours.

use crate::models::Tour;

/// A fixed-capacity collection of [`Tour`]s forming one generation.
///
/// A population is created empty with a reserved capacity, filled by the
/// seeder or the evolution engine, and rebuilt each generation. Aggregate
/// queries ([`best_tour`](Population::best_tour),
/// [`average_length`](Population::average_length)) assume all slots are
/// filled; querying a partially filled population is a precondition
/// violation in the engine, surfaced as `None`/`0.0` rather than junk.
///
/// # Examples
///
/// ```
/// use tsp_evolve::models::{City, Tour};
/// use tsp_evolve::distance::DistanceMatrix;
/// use tsp_evolve::population::Population;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let mut population = Population::new(2);
/// population.push(Tour::new(vec![0, 1, 2], &dm).unwrap());
/// population.push(Tour::new(vec![0, 2, 1], &dm).unwrap());
/// assert!(population.is_full());
///
/// population.recalculate_fitness();
/// let best = population.best_tour().unwrap();
/// assert!((best.length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Tour>,
    capacity: usize,
    total_fitness: f64,
}

impl Population {
    /// Creates an empty population with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            tours: Vec::with_capacity(capacity),
            capacity,
            total_fitness: 0.0,
        }
    }

    /// Adds a tour to the population.
    ///
    /// # Panics
    ///
    /// Panics if the population is already at capacity — overfilling a
    /// generation is a bug in the engine, not a recoverable condition.
    pub fn push(&mut self, tour: Tour) {
        assert!(
            self.tours.len() < self.capacity,
            "population already holds {} tours",
            self.capacity
        );
        self.tours.push(tour);
    }

    /// Returns true when every slot is filled.
    pub fn is_full(&self) -> bool {
        self.tours.len() == self.capacity
    }

    /// Number of tours currently in the population.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns true if no tours have been added yet.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Configured capacity (generation size).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The member tours.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Sums all members' fitness into the cached total. O(size).
    pub fn recalculate_fitness(&mut self) {
        self.total_fitness = self.tours.iter().map(Tour::fitness).sum();
    }

    /// Cached total fitness from the last
    /// [`recalculate_fitness`](Population::recalculate_fitness) call.
    pub fn total_fitness(&self) -> f64 {
        self.total_fitness
    }

    /// Returns the member with minimum length, or `None` if empty.
    ///
    /// Ties are broken by first-encountered order; repeated calls on the
    /// same population return the same member.
    pub fn best_tour(&self) -> Option<&Tour> {
        let mut best: Option<&Tour> = None;
        for tour in &self.tours {
            match best {
                Some(b) if tour.length() >= b.length() => {}
                _ => best = Some(tour),
            }
        }
        best
    }

    /// Arithmetic mean of member lengths, or `0.0` if empty.
    pub fn average_length(&self) -> f64 {
        if self.tours.is_empty() {
            return 0.0;
        }
        self.tours.iter().map(Tour::length).sum::<f64>() / self.tours.len() as f64
    }
}
