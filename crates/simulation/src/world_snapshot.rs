//! Read-only grid views for renderers and agents.
//!
//! [`GridSnapshot`] is the only shape in which grid state leaves the engine.
//! Inside a bevy `App`, [`publish_snapshot`] refreshes [`LatestSnapshot`] and
//! emits [`BatchCompleted`] once per executed command, never per turn.

use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::config::VISIBLE_INTENSITY;
use crate::grid::GridState;
use crate::scenario::{RunState, ScenarioRunner};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct SnapshotCell {
    pub x: u32,
    pub z: u32,
    pub feral_intensity: f32,
    pub has_intervention: bool,
    pub is_highway: bool,
}

impl SnapshotCell {
    /// Renderers draw a feature only above [`VISIBLE_INTENSITY`].
    pub fn is_visible(&self) -> bool {
        self.feral_intensity > VISIBLE_INTENSITY
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct GridSnapshot {
    pub width: u32,
    pub height: u32,
    /// Turns executed since the last reset.
    pub turn: u32,
    pub state: RunState,
    /// Row-major over `z`, matching [`GridState`] storage.
    pub cells: Vec<SnapshotCell>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &GridState, turn: u32, state: RunState) -> Self {
        let cells = grid
            .iter_cells()
            .map(|(x, z, cell)| SnapshotCell {
                x: x as u32,
                z: z as u32,
                feral_intensity: cell.feral_intensity,
                has_intervention: cell.has_intervention,
                is_highway: cell.is_highway,
            })
            .collect();
        Self {
            width: grid.width as u32,
            height: grid.height as u32,
            turn,
            state,
            cells,
        }
    }

    pub fn cell(&self, x: u32, z: u32) -> Option<&SnapshotCell> {
        if x >= self.width || z >= self.height {
            return None;
        }
        self.cells.get((z * self.width + x) as usize)
    }

    pub fn visible_cells(&self) -> impl Iterator<Item = &SnapshotCell> + '_ {
        self.cells.iter().filter(|c| c.is_visible())
    }

    pub fn interventions(&self) -> impl Iterator<Item = &SnapshotCell> + '_ {
        self.cells.iter().filter(|c| c.has_intervention)
    }

    /// Score derived from this view. Informational only; recorded scenario
    /// results are authoritative.
    pub fn live_score(&self) -> i64 {
        let total: f64 = self.cells.iter().map(|c| c.feral_intensity as f64).sum();
        (total * 100.0).round() as i64
    }
}

// ---------------------------------------------------------------------------
// ECS publication
// ---------------------------------------------------------------------------

/// Most recently published snapshot.
#[derive(Resource, Debug, Clone, Default)]
pub struct LatestSnapshot {
    /// Runner generation the snapshot was taken at, `None` before the first publish.
    pub generation: Option<u64>,
    pub snapshot: GridSnapshot,
}

/// Sent after every command that changed the grid or run state.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct BatchCompleted {
    pub generation: u64,
    pub state: RunState,
    pub turn: u32,
    pub live_score: i64,
}

/// Publishes a new snapshot when the runner's generation has moved.
pub fn publish_snapshot(
    runner: Res<ScenarioRunner>,
    mut latest: ResMut<LatestSnapshot>,
    mut completed: EventWriter<BatchCompleted>,
) {
    if latest.generation == Some(runner.generation()) {
        return;
    }

    let snapshot = runner.snapshot();
    completed.send(BatchCompleted {
        generation: runner.generation(),
        state: runner.state(),
        turn: runner.turn(),
        live_score: snapshot.live_score(),
    });
    latest.generation = Some(runner.generation());
    latest.snapshot = snapshot;
}
