//! Stagnation tracking and adaptive mutation.

/// Observes successive best-tour lengths and counts generations without
/// strict improvement.
///
/// The stagnation count drives the adaptive mutation rate: intensity grows
/// linearly with stagnation and saturates at 3× the base rate after 200
/// stagnant generations. This is the engine's only
/// exploration-vs-exploitation feedback control.
///
/// # Examples
///
/// ```
/// use tsp_evolve::engine::StagnationTracker;
///
/// let mut tracker = StagnationTracker::new();
/// assert!(tracker.observe(100.0)); // first observation improves
/// assert!(!tracker.observe(100.0));
/// assert_eq!(tracker.count(), 1);
/// assert!(tracker.observe(99.0));
/// assert_eq!(tracker.count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct StagnationTracker {
    best_ever: f64,
    count: u64,
}

impl Default for StagnationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StagnationTracker {
    /// Creates a tracker with no observations.
    pub fn new() -> Self {
        Self {
            best_ever: f64::INFINITY,
            count: 0,
        }
    }

    /// Records the best tour length of a generation.
    ///
    /// A strict improvement over the best-ever length resets the stagnation
    /// count to zero and returns `true`; otherwise the count increments and
    /// this returns `false`.
    pub fn observe(&mut self, best_length: f64) -> bool {
        if best_length < self.best_ever {
            self.best_ever = best_length;
            self.count = 0;
            true
        } else {
            self.count += 1;
            false
        }
    }

    /// Best tour length ever observed, `f64::INFINITY` before the first
    /// observation.
    pub fn best_ever(&self) -> f64 {
        self.best_ever
    }

    /// Consecutive generations without strict improvement.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mutation rate scaled by stagnation:
    /// `base * (1 + min(count / 100, 2))`, saturating at `3 * base`.
    pub fn adaptive_rate(&self, base_rate: f64) -> f64 {
        let factor = (self.count as f64 / 100.0).min(2.0);
        base_rate * (1.0 + factor)
    }

    /// Clears all observations.
    pub fn reset(&mut self) {
        self.best_ever = f64::INFINITY;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_improves() {
        let mut tracker = StagnationTracker::new();
        assert_eq!(tracker.best_ever(), f64::INFINITY);
        assert!(tracker.observe(50.0));
        assert_eq!(tracker.best_ever(), 50.0);
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_count_increments_without_improvement() {
        let mut tracker = StagnationTracker::new();
        tracker.observe(50.0);
        assert!(!tracker.observe(50.0)); // equal is not strict improvement
        assert!(!tracker.observe(51.0));
        assert_eq!(tracker.count(), 2);
    }

    #[test]
    fn test_improvement_resets_count() {
        let mut tracker = StagnationTracker::new();
        tracker.observe(50.0);
        tracker.observe(50.0);
        tracker.observe(50.0);
        assert_eq!(tracker.count(), 2);
        assert!(tracker.observe(49.9));
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.best_ever(), 49.9);
    }

    #[test]
    fn test_adaptive_rate_base_at_zero() {
        let tracker = StagnationTracker::new();
        assert_eq!(tracker.adaptive_rate(0.015), 0.015);
    }

    #[test]
    fn test_adaptive_rate_scales_linearly() {
        let mut tracker = StagnationTracker::new();
        tracker.observe(10.0);
        for _ in 0..50 {
            tracker.observe(10.0);
        }
        assert_eq!(tracker.count(), 50);
        assert!((tracker.adaptive_rate(0.02) - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_adaptive_rate_saturates_at_triple() {
        let mut tracker = StagnationTracker::new();
        tracker.observe(10.0);
        for _ in 0..200 {
            tracker.observe(10.0);
        }
        assert_eq!(tracker.count(), 200);
        assert!((tracker.adaptive_rate(0.015) - 0.045).abs() < 1e-12);
        for _ in 0..300 {
            tracker.observe(10.0);
        }
        assert!((tracker.adaptive_rate(0.015) - 0.045).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut tracker = StagnationTracker::new();
        tracker.observe(10.0);
        tracker.observe(10.0);
        tracker.reset();
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.best_ever(), f64::INFINITY);
    }
}
