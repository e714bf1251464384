//! Random implementations.

use std::cell::RefCell;

use geomap_domain::RandomPort;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// System random - entropy-seeded unless a seed is given.
pub struct SystemRandom {
    rng: RefCell<StdRng>,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence for reproducible sessions and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_f64(&self, min: f64, max: f64) -> f64 {
        if min >= max || !min.is_finite() || !max.is_finite() {
            return min;
        }
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn gen_bool(&self) -> bool {
        self.rng.borrow_mut().gen_bool(0.5)
    }

    fn gen_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.borrow_mut().gen_range(0..len)
    }
}

/// Fixed random for testing: lower bounds, `false`, index 0.
#[cfg(test)]
pub struct FixedRandom;

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_f64(&self, min: f64, _max: f64) -> f64 {
        min
    }

    fn gen_bool(&self) -> bool {
        false
    }

    fn gen_index(&self, _len: usize) -> usize {
        0
    }
}
