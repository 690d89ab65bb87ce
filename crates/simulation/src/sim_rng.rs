//! Deterministic simulation RNG.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. Grid
//! initialization takes a `&mut SimRng` instead of reaching for
//! `rand::thread_rng()`, so identical seeds produce identical grids.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ReseedPolicy, DEFAULT_SEED};

/// Deterministic RNG for all simulation randomness.
///
/// Callers use `rng.0` directly (a `ChaCha8Rng` implementing `rand::Rng`).
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Seed used to initialize the grid for reset cycle `cycle`.
pub fn cycle_seed(base: u64, cycle: u64, policy: ReseedPolicy) -> u64 {
    match policy {
        ReseedPolicy::Fixed => base,
        ReseedPolicy::Advance => base.wrapping_add(cycle),
    }
}
