//! Connector selection for the Complex converter
//!
//! The Complex converter picks its subordinator from a candidate pool. The
//! choice is a capability rather than a hidden RNG so callers can substitute
//! a seeded or fixed chooser and make conversion deterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Picks one candidate out of a pool
pub trait ConnectorChooser: Send + Sync {
    /// Return an index below `len`. Called with `len >= 1`.
    fn pick(&self, len: usize) -> usize;
}

/// Default chooser backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngChooser;

impl ConnectorChooser for ThreadRngChooser {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded chooser for reproducible conversion runs
#[derive(Debug)]
pub struct SeededChooser {
    rng: Mutex<SmallRng>,
}

impl SeededChooser {
    /// Create a chooser seeded with the given value
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl ConnectorChooser for SeededChooser {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len)
    }
}

/// Chooser that always picks the same position, for tests
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl ConnectorChooser for FixedChooser {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_bounds() {
        let chooser = ThreadRngChooser;
        for _ in 0..100 {
            assert!(chooser.pick(5) < 5);
        }
    }

    #[test]
    fn seeded_chooser_is_reproducible() {
        let a = SeededChooser::new(42);
        let b = SeededChooser::new(42);
        let picks_a: Vec<usize> = (0..10).map(|_| a.pick(5)).collect();
        let picks_b: Vec<usize> = (0..10).map(|_| b.pick(5)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn fixed_chooser_wraps() {
        assert_eq!(FixedChooser(7).pick(5), 2);
        assert_eq!(FixedChooser(0).pick(5), 0);
    }
}
