//! Host-facing solver facade.
//!
//! Owns the city list, the live population, and the run state machine, and
//! exposes the command surface (`add_city`, `start`, `stop`, `reset`,
//! `step`) plus read-only snapshots for the rendering host. One `step`
//! computes exactly one generation synchronously; the host invokes it on
//! its own cadence (for example once per display refresh).

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::constructive::{greedy_edge, nearest_neighbor};
use crate::distance::DistanceMatrix;
use crate::error::{SolverError, SolverResult};
use crate::models::{City, Tour};
use crate::population::Population;

use super::evolution::evolve;
use super::stagnation::StagnationTracker;

/// Minimum number of cities before a run can start.
pub const MIN_CITIES: usize = 3;

/// Run state of the solver.
///
/// Transitions are driven only by external commands: `start` moves
/// Idle/Stopped to Running, `stop` moves Running to Stopped, and `reset`
/// returns to Idle from anywhere. The solver never self-terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverState {
    /// No run in progress; population discarded.
    Idle,
    /// Generations advance on each `step`.
    Running,
    /// Paused; the population is retained for resumption.
    Stopped,
}

/// Best tour as exposed to the host: city visitation order plus length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSummary {
    /// City indices in visitation order.
    pub order: Vec<usize>,
    /// Total closed-tour length.
    pub length: f64,
}

/// Read-only view of solver state, taken once per host tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSnapshot {
    /// Current run state.
    pub state: SolverState,
    /// Completed generation count.
    pub generation: u64,
    /// Number of cities added so far.
    pub num_cities: usize,
    /// Best tour found so far, if a population exists.
    pub best: Option<TourSummary>,
    /// Mean tour length across the current population.
    pub average_length: f64,
    /// Consecutive generations without strict improvement.
    pub stagnation_count: u64,
    /// Stagnation-adjusted mutation rate in effect for the next generation.
    pub mutation_rate: f64,
    /// Wall-clock time spent running since `start`, pauses excluded.
    pub elapsed: Duration,
}

/// Evolutionary TSP solver.
///
/// The random source is injected at construction so runs are reproducible
/// with a seeded generator.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tsp_evolve::engine::TspSolver;
///
/// let mut solver = TspSolver::with_defaults(StdRng::seed_from_u64(42));
/// solver.add_city(0.0, 0.0, None);
/// solver.add_city(1.0, 0.0, None);
/// solver.add_city(1.0, 1.0, None);
/// solver.add_city(0.0, 1.0, None);
///
/// solver.start().unwrap();
/// for _ in 0..200 {
///     solver.step();
/// }
///
/// let snapshot = solver.snapshot();
/// let best = snapshot.best.unwrap();
/// assert!((best.length - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct TspSolver<R: Rng> {
    config: SolverConfig,
    rng: R,
    cities: Vec<City>,
    distances: DistanceMatrix,
    population: Option<Population>,
    best: Option<Tour>,
    generation: u64,
    state: SolverState,
    stagnation: StagnationTracker,
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl<R: Rng> TspSolver<R> {
    /// Creates a solver with the given configuration and random source.
    ///
    /// Returns a configuration error if the parameters are out of bounds.
    pub fn new(config: SolverConfig, rng: R) -> SolverResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            cities: Vec::new(),
            distances: DistanceMatrix::new(0),
            population: None,
            best: None,
            generation: 0,
            state: SolverState::Idle,
            stagnation: StagnationTracker::new(),
            started_at: None,
            elapsed: Duration::ZERO,
        })
    }

    /// Creates a solver with default parameters.
    pub fn with_defaults(rng: R) -> Self {
        Self::new(SolverConfig::default(), rng).expect("default config is valid")
    }

    /// The solver configuration (fixed at construction).
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The cities added so far.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Current run state.
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Completed generation count.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Appends a city and returns its index.
    ///
    /// The distance matrix is rebuilt, and once at least three cities
    /// exist the population is (re)seeded: heuristic tours in the first
    /// slots, random permutations in the rest.
    pub fn add_city(&mut self, x: f64, y: f64, name: Option<&str>) -> usize {
        let id = self.cities.len();
        let mut city = City::new(id, x, y);
        if let Some(name) = name {
            city = city.with_name(name);
        }
        self.cities.push(city);
        self.distances = DistanceMatrix::from_cities(&self.cities);
        if self.cities.len() >= MIN_CITIES {
            self.initialize_population();
        }
        id
    }

    /// Transitions Idle/Stopped to Running.
    ///
    /// Fails with [`SolverError::NotEnoughCities`] below three cities.
    /// Idempotent while already running.
    pub fn start(&mut self) -> SolverResult<()> {
        if self.cities.len() < MIN_CITIES {
            return Err(SolverError::NotEnoughCities {
                required: MIN_CITIES,
                actual: self.cities.len(),
            });
        }
        if self.state == SolverState::Running {
            return Ok(());
        }
        if self.population.is_none() {
            self.initialize_population();
        }
        self.state = SolverState::Running;
        self.started_at = Some(Instant::now());
        info!(cities = self.cities.len(), "solver started");
        Ok(())
    }

    /// Transitions Running to Stopped and pauses the wall clock.
    /// Idempotent.
    pub fn stop(&mut self) {
        if self.state != SolverState::Running {
            return;
        }
        if let Some(started) = self.started_at.take() {
            self.elapsed += started.elapsed();
        }
        self.state = SolverState::Stopped;
        info!(generation = self.generation, "solver stopped");
    }

    /// Discards all cities, the population, the best tour, and all
    /// stagnation and timing state, returning to Idle.
    pub fn reset(&mut self) {
        self.cities.clear();
        self.distances = DistanceMatrix::new(0);
        self.population = None;
        self.best = None;
        self.generation = 0;
        self.state = SolverState::Idle;
        self.stagnation.reset();
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        info!("solver reset");
    }

    /// Advances exactly one generation when Running.
    ///
    /// Returns `false` without doing any work in any other state — the
    /// host's cancellation check reduces to calling this and observing the
    /// result.
    pub fn step(&mut self) -> bool {
        if self.state != SolverState::Running {
            return false;
        }
        let rate = self.stagnation.adaptive_rate(self.config.mutation_rate);
        let current = self
            .population
            .as_ref()
            .expect("running solver has a population");
        let next = evolve(current, &self.distances, &self.config, rate, &mut self.rng);

        let best = next.best_tour().expect("evolved population is full").clone();
        let improved = self.stagnation.observe(best.length());
        if improved {
            self.best = Some(best);
        }
        self.population = Some(next);
        self.generation += 1;
        debug!(
            generation = self.generation,
            best_length = self.stagnation.best_ever(),
            stagnation = self.stagnation.count(),
            "generation complete"
        );
        true
    }

    /// Best tour found so far.
    ///
    /// Fails with [`SolverError::NotReady`] before the population has been
    /// initialized.
    pub fn best_tour(&self) -> SolverResult<&Tour> {
        self.best.as_ref().ok_or(SolverError::NotReady)
    }

    /// Takes a read-only snapshot of solver state for the host.
    pub fn snapshot(&self) -> SolverSnapshot {
        SolverSnapshot {
            state: self.state,
            generation: self.generation,
            num_cities: self.cities.len(),
            best: self.best.as_ref().map(|tour| TourSummary {
                order: tour.order().to_vec(),
                length: tour.length(),
            }),
            average_length: self
                .population
                .as_ref()
                .map_or(0.0, Population::average_length),
            stagnation_count: self.stagnation.count(),
            mutation_rate: self.stagnation.adaptive_rate(self.config.mutation_rate),
            elapsed: self.elapsed(),
        }
    }

    /// Wall-clock time spent in the Running state since `start`.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started) => self.elapsed + started.elapsed(),
            None => self.elapsed,
        }
    }

    /// Seeds a fresh population: nearest-neighbor from city 0, greedy edge
    /// matching, nearest-neighbor from a random start, then uniformly
    /// random permutations for the remaining slots.
    fn initialize_population(&mut self) {
        let n = self.cities.len();
        debug_assert!(n >= MIN_CITIES);
        let distances = &self.distances;

        let mut population = Population::new(self.config.population_size);
        population.push(
            Tour::new(nearest_neighbor(distances, 0), distances).expect("cities exist"),
        );
        population.push(Tour::new(greedy_edge(distances), distances).expect("cities exist"));
        let start = self.rng.random_range(0..n);
        population.push(
            Tour::new(nearest_neighbor(distances, start), distances).expect("cities exist"),
        );

        while !population.is_full() {
            let mut order: Vec<usize> = (0..n).collect();
            // Fisher-Yates shuffle
            for i in (1..n).rev() {
                let j = self.rng.random_range(0..=i);
                order.swap(i, j);
            }
            population.push(Tour::new(order, distances).expect("cities exist"));
        }
        population.recalculate_fitness();

        let best = population.best_tour().expect("population is full").clone();
        self.stagnation.reset();
        self.stagnation.observe(best.length());
        info!(
            cities = n,
            population = population.len(),
            best_length = best.length(),
            "population initialized"
        );
        self.best = Some(best);
        self.population = Some(population);
    }
}
