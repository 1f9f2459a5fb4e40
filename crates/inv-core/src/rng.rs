//! Deterministic simulation RNG.
//!
//! Every random choice in a run (which alien moves, which road it tries first)
//! is drawn from one `SimRng` seeded from `SimConfig::seed`, so two runs with
//! the same map and seed are identical.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Single-threaded use only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform starting offset for a cyclic scan over `len` items.
    ///
    /// Returns 0 for an empty range so callers can scan unconditionally.
    #[inline]
    pub fn start_offset(&mut self, len: usize) -> usize {
        if len == 0 { 0 } else { self.0.gen_range(0..len) }
    }
}

/// Indices `0..len` in cyclic order beginning at `start`.
///
/// `rotated(4, 2)` yields `2, 3, 0, 1`.
pub fn rotated(len: usize, start: usize) -> impl Iterator<Item = usize> {
    (start..len).chain(0..start.min(len))
}
