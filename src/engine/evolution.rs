//! One-generation evolution step.

use rand::Rng;

use crate::config::SolverConfig;
use crate::distance::DistanceMatrix;
use crate::models::Tour;
use crate::population::Population;

use super::operators::{invert_mutation, order_crossover, swap_mutation, tournament_select};

/// Produces the next generation from the current population.
///
/// 1. **Elitism** — the `elite_size` lowest-length tours are cloned
///    unchanged into the first slots (stable order on ties).
/// 2. **Reproduction** — each remaining slot is filled by two independent
///    tournament selections, order crossover with probability
///    `crossover_rate` (otherwise a copy of the first parent), and one of
///    two mutation operators chosen with equal probability: per-position
///    swap or a single segment reversal, both at `mutation_rate`.
/// 3. The new population's total fitness is recalculated.
///
/// `mutation_rate` is the stagnation-adjusted rate for this generation, not
/// the configured base rate. The caller owns best-tour bookkeeping and the
/// generation counter.
///
/// # Panics
///
/// Panics if the current population is not full; evolving a partially
/// seeded generation is a bug in the caller.
pub fn evolve<R: Rng>(
    population: &Population,
    distances: &DistanceMatrix,
    config: &SolverConfig,
    mutation_rate: f64,
    rng: &mut R,
) -> Population {
    assert!(
        population.is_full(),
        "cannot evolve a partially filled population"
    );

    let n_cities = distances.size();
    let mut next = Population::new(population.capacity());

    // Identify the true top-E by length, stable on ties
    let mut by_length: Vec<usize> = (0..population.len()).collect();
    by_length.sort_by(|&a, &b| {
        population.tours()[a]
            .length()
            .partial_cmp(&population.tours()[b].length())
            .expect("tour length should not be NaN")
    });
    for &idx in by_length.iter().take(config.elite_size) {
        next.push(population.tours()[idx].clone());
    }

    while !next.is_full() {
        let parent1 = tournament_select(population, config.tournament_size, rng);
        let parent2 = tournament_select(population, config.tournament_size, rng);

        let order = if rng.random::<f64>() < config.crossover_rate {
            order_crossover(parent1.order(), parent2.order(), rng)
        } else {
            parent1.order().to_vec()
        };
        let mut child = Tour::new(order, distances).expect("parents are non-empty");

        if rng.random_bool(0.5) {
            swap_mutation(child.order_mut(), mutation_rate, rng);
        } else {
            invert_mutation(child.order_mut(), mutation_rate, rng);
        }
        child.recompute(distances);

        debug_assert!(
            child.is_permutation_of(n_cities),
            "crossover/mutation produced an invalid permutation"
        );
        next.push(child);
    }

    next.recalculate_fitness();
    next
}
