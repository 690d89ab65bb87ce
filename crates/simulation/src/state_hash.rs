//! Deterministic grid fingerprinting for reproducibility checks.
//!
//! Hashes, in a fixed order:
//!
//! 1. Grid dimensions
//! 2. Every cell in storage order: intensity bits, vulnerability bits, then
//!    the intervention and highway flags
//!
//! Float values are hashed by bit pattern, so two grids share a fingerprint
//! only when they are bit-identical.

use bevy::prelude::*;
use xxhash_rust::xxh64::Xxh64;

use crate::grid::GridState;
use crate::scenario::ScenarioRunner;

/// Seed for the xxHash64 fingerprint.
const FINGERPRINT_SEED: u64 = 0;

/// Fingerprint of the runner's grid, refreshed whenever its generation moves.
#[derive(Resource, Default, Clone, Debug)]
pub struct StateHash {
    pub generation: Option<u64>,
    pub hash: u64,
}

/// Compute a deterministic 64-bit fingerprint of a grid.
pub fn grid_fingerprint(grid: &GridState) -> u64 {
    let mut hasher = Xxh64::new(FINGERPRINT_SEED);

    hasher.update(&(grid.width as u64).to_le_bytes());
    hasher.update(&(grid.height as u64).to_le_bytes());

    for cell in &grid.cells {
        hasher.update(&cell.feral_intensity.to_bits().to_le_bytes());
        hasher.update(&cell.vulnerability.to_bits().to_le_bytes());
        hasher.update(&[cell.has_intervention as u8, cell.is_highway as u8]);
    }

    hasher.digest()
}

pub fn update_state_hash(runner: Res<ScenarioRunner>, mut state_hash: ResMut<StateHash>) {
    if state_hash.generation == Some(runner.generation()) {
        return;
    }
    state_hash.generation = Some(runner.generation());
    state_hash.hash = grid_fingerprint(runner.grid());
}
