use std::path::PathBuf;

use bevy::prelude::*;
use simulation::scenario::ScenarioRunner;
use simulation::SimulationSet;

use crate::run_export::write_export;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Request an export of the runner's current state.
#[derive(Event, Debug, Clone)]
pub struct ExportRunEvent {
    pub path: PathBuf,
}

/// Sent once per handled [`ExportRunEvent`].
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ExportFinished {
    pub path: PathBuf,
    /// Bytes written, or the error message.
    pub result: Result<usize, String>,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ExportRunEvent>()
            .add_event::<ExportFinished>()
            .add_systems(Update, handle_export_requests.after(SimulationSet::Commands));
    }
}

/// Writes one export per request, after the frame's commands have executed.
fn handle_export_requests(
    mut requests: EventReader<ExportRunEvent>,
    mut finished: EventWriter<ExportFinished>,
    runner: Res<ScenarioRunner>,
) {
    for request in requests.read() {
        let result = write_export(&request.path, &runner).map_err(|e| {
            warn!("Export to {} failed: {e}", request.path.display());
            e.to_string()
        });
        finished.send(ExportFinished {
            path: request.path.clone(),
            result,
        });
    }
}
