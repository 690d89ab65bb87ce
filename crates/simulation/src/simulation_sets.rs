//! Deterministic ordering of the engine's systems via `SystemSet` phases.
//!
//! ```text
//! Commands  ->  Publish
//! ```
//!
//! * **Commands** – Drains the action queue and runs each command against the
//!   `ScenarioRunner`. This is the only phase that mutates engine state.
//! * **Publish** – Read-only: refreshes the latest snapshot, the grid
//!   fingerprint, and emits `BatchCompleted`. Renderers consume its output, so
//!   they only ever see grids from between batches.

use bevy::prelude::*;

/// Ordered phases for engine systems in the `Update` schedule.
///
/// Configured as a chain: `Commands` → `Publish`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Commands,
    Publish,
}

pub struct SimulationSetsPlugin;

impl Plugin for SimulationSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (SimulationSet::Commands, SimulationSet::Publish).chain(),
        );
    }
}
