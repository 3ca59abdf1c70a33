//! Daily fact rotation.
//!
//! # Determinism strategy
//!
//! The rotation holds an order (a permutation of `0..len`) and a day counter.
//! [`FactRotation::next_index`] is called exactly once per calendar day and
//! returns `order[(day - 1) % len]`, so the fact shown on a day depends only
//! on how many days precede it, never on how many other events fire.
//!
//! `FactOrder::Shuffled` draws the permutation once from a `SmallRng` seeded
//! with the configured seed.  The same seed always yields the same order.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::FactOrder;

/// Once-per-day cursor into a fact list.
#[derive(Clone, Debug)]
pub struct FactRotation {
    order: Vec<usize>,
    day:   usize,
}

impl FactRotation {
    /// Build a rotation over `len` facts.
    pub fn new(len: usize, order: FactOrder) -> Self {
        let mut indices: Vec<usize> = (0..len).collect();
        if let FactOrder::Shuffled { seed } = order {
            indices.shuffle(&mut SmallRng::seed_from_u64(seed));
        }
        Self { order: indices, day: 0 }
    }

    /// Fact index for the next day, or `None` for an empty list.
    pub fn next_index(&mut self) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }
        let idx = self.order[self.day % self.order.len()];
        self.day += 1;
        Some(idx)
    }

    /// Days consumed so far.
    #[inline]
    pub fn days_advanced(&self) -> usize {
        self.day
    }

    /// The full permutation, in rotation order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}
