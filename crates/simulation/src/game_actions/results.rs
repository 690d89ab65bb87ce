use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::scenario::ScenarioResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionResult {
    /// A scenario batch completed.
    Scenario { result: ScenarioResult },
    /// An intervention was placed at the given coordinate.
    Deployed { x: u32, z: u32 },
    /// The runner returned to idle with a fresh grid.
    Reset { seed: u64 },
    /// The command was rejected; nothing changed.
    Error { error: SimError },
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, ActionResult::Error { .. })
    }

    pub fn error(&self) -> Option<&SimError> {
        match self {
            ActionResult::Error { error } => Some(error),
            _ => None,
        }
    }
}
