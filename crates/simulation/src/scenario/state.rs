use std::fmt;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Progress through the control -> intervention comparison protocol.
///
/// ```text
/// Idle -> ControlRunning -> ControlComplete -> InterventionReady
///      -> InterventionRunning -> Complete
/// ```
///
/// Any state returns to `Idle` on reset. The two `*Running` states only exist
/// for the duration of a batch and are never observed between commands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Idle,
    ControlRunning,
    ControlComplete,
    InterventionReady,
    InterventionRunning,
    Complete,
}

impl RunState {
    pub fn can_run_control(self) -> bool {
        self == RunState::Idle
    }

    /// Additional sites may be added until the intervention run starts.
    pub fn can_deploy(self) -> bool {
        matches!(self, RunState::ControlComplete | RunState::InterventionReady)
    }

    pub fn can_run_intervention(self) -> bool {
        self == RunState::InterventionReady
    }

    pub fn label(self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::ControlRunning => "control running",
            RunState::ControlComplete => "control complete",
            RunState::InterventionReady => "intervention ready",
            RunState::InterventionRunning => "intervention running",
            RunState::Complete => "complete",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
