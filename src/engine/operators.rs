//! Genetic operators over tour permutations.
//!
//! - [`tournament_select`] — Sampling-with-replacement selection, fittest of the sample wins
//! - [`order_crossover`] — OX recombination preserving relative city order
//! - [`swap_mutation`] — Per-position random swaps at the given rate
//! - [`invert_mutation`] — Single rate-gated segment reversal (2-opt style)
//!
//! All operators take the RNG as an explicit `&mut R` so runs are
//! reproducible with a seeded generator.

use rand::Rng;

use crate::models::Tour;
use crate::population::Population;

/// Selects a parent by tournament: samples `tournament_size` members
/// uniformly at random with replacement and returns the one with the
/// highest fitness. Ties go to the first-sampled member.
///
/// # Panics
///
/// Panics if the population is empty or `tournament_size` is zero.
pub fn tournament_select<'a, R: Rng>(
    population: &'a Population,
    tournament_size: usize,
    rng: &mut R,
) -> &'a Tour {
    assert!(!population.is_empty(), "cannot select from an empty population");
    assert!(tournament_size > 0, "tournament size must be at least 1");

    let tours = population.tours();
    let mut best: Option<&Tour> = None;
    for _ in 0..tournament_size {
        let candidate = &tours[rng.random_range(0..tours.len())];
        // Strict > keeps the first-sampled member on ties
        match best {
            Some(b) if candidate.fitness() <= b.fitness() => {}
            _ => best = Some(candidate),
        }
    }
    best.expect("tournament sampled at least one member")
}

/// Order crossover (OX): copies a random contiguous slice of `parent1` into
/// the child at the same positions, then fills the remaining positions
/// left-to-right with `parent2`'s cities in their relative order, skipping
/// cities already placed.
///
/// The two cut indices are drawn over `[0, n)` and ordered, so the copied
/// slice is `[start, end)`. The result is always a valid permutation when
/// both parents are.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len());
    if n < 2 {
        return parent1.to_vec();
    }

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];
    for i in start..end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut p2 = parent2.iter().filter(|&&c| !placed[c]);
    for i in (0..start).chain(end..n) {
        child[i] = *p2.next().expect("parent2 has enough unused cities");
    }

    child
}

/// Per-position swap mutation: each position is swapped with a uniformly
/// random other position with probability `rate`.
pub fn swap_mutation<R: Rng>(order: &mut [usize], rate: f64, rng: &mut R) {
    let n = order.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            order.swap(i, j);
        }
    }
}

/// Segment reversal mutation: with probability `rate` (tested once), picks
/// two random cut indices and reverses the slice between them in place.
pub fn invert_mutation<R: Rng>(order: &mut [usize], rate: f64, rng: &mut R) {
    let n = order.len();
    if n < 2 {
        return;
    }
    if rng.random::<f64>() < rate {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        order[start..end].reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::City;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_matrix(n: usize) -> DistanceMatrix {
        let cities: Vec<City> = (0..n).map(|i| City::new(i, i as f64, 0.0)).collect();
        DistanceMatrix::from_cities(&cities)
    }

    fn shuffled(n: usize, rng: &mut StdRng) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            perm.swap(i, j);
        }
        perm
    }

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_tournament_prefers_fitter() {
        let dm = line_matrix(4);
        let mut population = Population::new(2);
        population.push(Tour::new(vec![0, 2, 1, 3], &dm).expect("valid"));
        population.push(Tour::new(vec![0, 1, 2, 3], &dm).expect("valid"));
        population.recalculate_fitness();

        // A tournament as large as the population almost surely samples the
        // optimal tour; with 64 entrants the odds of missing it are 2^-64.
        let mut rng = StdRng::seed_from_u64(7);
        let winner = tournament_select(&population, 64, &mut rng);
        assert_eq!(winner.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_tournament_size_one_is_uniform_pick() {
        let dm = line_matrix(4);
        let mut population = Population::new(2);
        population.push(Tour::new(vec![0, 1, 2, 3], &dm).expect("valid"));
        population.push(Tour::new(vec![0, 2, 1, 3], &dm).expect("valid"));
        population.recalculate_fitness();

        let mut rng = StdRng::seed_from_u64(1);
        let winner = tournament_select(&population, 1, &mut rng);
        assert!(population.tours().iter().any(|t| t == winner));
    }

    #[test]
    #[should_panic(expected = "empty population")]
    fn test_tournament_empty_panics() {
        let population = Population::new(3);
        let mut rng = StdRng::seed_from_u64(1);
        tournament_select(&population, 5, &mut rng);
    }

    #[test]
    fn test_order_crossover_valid_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let p1 = shuffled(10, &mut rng);
            let p2 = shuffled(10, &mut rng);
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 10));
        }
    }

    #[test]
    fn test_order_crossover_preserves_parent2_relative_order() {
        // Force the cuts by trying seeds until a mid slice appears, then
        // check the fill order outside the slice follows parent2.
        let p1 = vec![0, 1, 2, 3, 4, 5];
        let p2 = vec![5, 4, 3, 2, 1, 0];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 6));
            // Cities not copied from p1 must appear in p2's order
            let from_p2: Vec<usize> = child
                .iter()
                .copied()
                .filter(|c| {
                    // reconstruct which cities came from the p1 slice by
                    // checking contiguous runs equal to p1 positions
                    !p1.iter()
                        .zip(&child)
                        .any(|(&a, &b)| a == b && a == *c)
                })
                .collect();
            let mut p2_order = p2.clone();
            p2_order.retain(|c| from_p2.contains(c));
            assert_eq!(from_p2, p2_order);
        }
    }

    #[test]
    fn test_order_crossover_tiny_parents() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
        let child = order_crossover(&[0, 1], &[1, 0], &mut rng);
        assert!(is_permutation(&child, 2));
    }

    #[test]
    fn test_swap_mutation_permutation_invariant() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let mut order = shuffled(12, &mut rng);
            swap_mutation(&mut order, 0.5, &mut rng);
            assert!(is_permutation(&order, 12));
        }
    }

    #[test]
    fn test_swap_mutation_zero_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut order = vec![3, 1, 0, 2];
        swap_mutation(&mut order, 0.0, &mut rng);
        assert_eq!(order, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_invert_mutation_permutation_invariant() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let mut order = shuffled(12, &mut rng);
            invert_mutation(&mut order, 1.0, &mut rng);
            assert!(is_permutation(&order, 12));
        }
    }

    #[test]
    fn test_invert_mutation_zero_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut order = vec![3, 1, 0, 2];
        invert_mutation(&mut order, 0.0, &mut rng);
        assert_eq!(order, vec![3, 1, 0, 2]);
    }

    proptest! {
        #[test]
        fn prop_order_crossover_permutation(seed in any::<u64>(), n in 2usize..40) {
            let mut rng = StdRng::seed_from_u64(seed);
            let p1 = shuffled(n, &mut rng);
            let p2 = shuffled(n, &mut rng);
            let child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_permutation(&child, n));
        }

        #[test]
        fn prop_mutations_preserve_permutation(seed in any::<u64>(), n in 2usize..40, rate in 0.0f64..1.0) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut order = shuffled(n, &mut rng);
            swap_mutation(&mut order, rate, &mut rng);
            prop_assert!(is_permutation(&order, n));
            invert_mutation(&mut order, rate, &mut rng);
            prop_assert!(is_permutation(&order, n));
        }
    }
}
