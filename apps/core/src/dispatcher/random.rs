//! Pluggable random source for pool selection.
//!
//! Every pick is uniform and independent; nothing remembers earlier picks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index in `0..len`.
pub trait RandomSource: Send {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local entropy, the production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len.max(1))
    }
}

/// Reproducible sequence from a seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len.max(1))
    }
}

/// Always the same index (wrapped to the pool size). Pins selection in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixed_random_wraps() {
        let mut rng = FixedRandom(5);
        assert_eq!(rng.pick(4), 1);
        assert_eq!(rng.pick(4), 1);
        assert_eq!(rng.pick(1), 0);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let left: Vec<usize> = (0..20).map(|_| a.pick(4)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.pick(4)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_thread_random_stays_in_range_and_varies() {
        let mut rng = ThreadRandom;
        let seen: HashSet<usize> = (0..500).map(|_| rng.pick(4)).collect();
        assert!(seen.iter().all(|i| *i < 4));
        assert!(seen.len() > 1);
    }
}
