//! Injected randomness for carving and solving
//!
//! Both algorithms draw uniform indices from the same source, so a fixed seed
//! (or a fixed sequence) reproduces the maze and the solver's exploration.

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;

/// Supplier of uniform integers over a bounded range
pub trait RandomSource {
    /// Uniform index in `0..bound`
    ///
    /// Implementations return 0 when `bound` is 0; the algorithms never ask
    /// for an index into an empty set.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Pick one element uniformly at random
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

/// Seeded random selector for reproducible choices
#[derive(Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source from a fresh random seed
    ///
    /// The seed stays available through [`SeededRandom::seed`] so a run can be
    /// reproduced later.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this source was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed sequence of values, wrapping around at the end
///
/// Each value is reduced modulo the requested bound. An empty sequence always
/// yields 0, i.e. the first candidate.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    /// Create a source replaying `values`
    pub const fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Number of values drawn so far
    pub const fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }

        let value = if self.values.is_empty() {
            0
        } else {
            self.values
                .get(self.position % self.values.len())
                .copied()
                .unwrap_or(0)
        };
        self.position += 1;
        value % bound
    }
}
