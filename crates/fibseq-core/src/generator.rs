//! Fibonacci term generator.
//!
//! The generator owns its two-term state explicitly. Callers keep the same
//! [`FibonacciGenerator`] alive for as long as the sequence should continue;
//! nothing resets it behind their back.

use fibseq_common::SequenceConfig;
use tracing::trace;

/// Retained recurrence state: the two terms preceding the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciGenerator {
    previous: i32,
    previous_plus_one: i32,
}

impl FibonacciGenerator {
    /// Create a generator producing 1, 1, 2, 3, 5, 8, 13, ...
    pub fn new() -> Self {
        Self::with_config(&SequenceConfig::default())
    }

    /// Create a generator with an explicit `(previous, previous_plus_one)` seed.
    pub fn with_seed(previous: i32, previous_plus_one: i32) -> Self {
        Self {
            previous,
            previous_plus_one,
        }
    }

    /// Create a generator from a [`SequenceConfig`].
    pub fn with_config(config: &SequenceConfig) -> Self {
        let (previous, previous_plus_one) = config.seed();
        Self::with_seed(previous, previous_plus_one)
    }

    /// Produce the next term and advance the state.
    ///
    /// Returns `None` without touching the state if the term would overflow.
    pub fn next_value(&mut self) -> Option<i32> {
        let next = self.previous.checked_add(self.previous_plus_one)?;

        self.previous = self.previous_plus_one;
        self.previous_plus_one = next;

        trace!(value = next, "Generated term");
        Some(next)
    }

    /// Current `(previous, previous_plus_one)` pair.
    pub fn state(&self) -> (i32, i32) {
        (self.previous, self.previous_plus_one)
    }
}

impl Default for FibonacciGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciGenerator {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_terms() {
        let mut generator = FibonacciGenerator::new();
        let terms: Vec<i32> = (0..8).filter_map(|_| generator.next_value()).collect();

        assert_eq!(terms, vec![1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn test_state_tracks_preceding_terms() {
        let mut generator = FibonacciGenerator::new();
        assert_eq!(generator.state(), (1, 0));

        assert_eq!(generator.next_value(), Some(1));
        assert_eq!(generator.state(), (0, 1));

        assert_eq!(generator.next_value(), Some(1));
        assert_eq!(generator.state(), (1, 1));

        assert_eq!(generator.next_value(), Some(2));
        assert_eq!(generator.state(), (1, 2));

        assert_eq!(generator.next_value(), Some(3));
        assert_eq!(generator.state(), (2, 3));
    }

    #[test]
    fn test_state_persists_across_call_sequences() {
        let mut generator = FibonacciGenerator::new();

        let first: Vec<i32> = generator.by_ref().take(3).collect();
        let second: Vec<i32> = generator.by_ref().take(4).collect();

        assert_eq!(first, vec![1, 1, 2]);
        assert_eq!(second, vec![3, 5, 8, 13]);
    }

    #[test]
    fn test_negative_seed_leads_with_zero() {
        let generator = FibonacciGenerator::with_seed(-1, 1);
        let terms: Vec<i32> = generator.take(7).collect();

        assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_with_config() {
        let config = SequenceConfig {
            seed_previous: 2,
            seed_next: 3,
        };
        let generator = FibonacciGenerator::with_config(&config);

        assert_eq!(generator.state(), (2, 3));
        assert_eq!(generator.take(3).collect::<Vec<_>>(), vec![5, 8, 13]);
    }

    #[test]
    fn test_overflow_leaves_state_untouched() {
        let mut generator = FibonacciGenerator::new();

        // F(46) is the largest term that fits in an i32.
        assert_eq!(generator.by_ref().count(), 46);
        assert_eq!(generator.state(), (1_134_903_170, 1_836_311_903));

        assert_eq!(generator.next_value(), None);
        assert_eq!(generator.state(), (1_134_903_170, 1_836_311_903));
        assert_eq!(generator.next_value(), None);
    }
}
