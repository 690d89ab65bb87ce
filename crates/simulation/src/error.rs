// ---------------------------------------------------------------------------
// SimError: rejected engine commands
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scenario::RunState;

/// Errors returned by engine operations.
///
/// Every error is reported before any state is touched, so a rejected
/// command always leaves the runner exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, z: usize },
    /// The cell already hosts an intervention.
    AlreadyDeployed { x: usize, z: usize },
    /// The operation is not allowed from the current run state.
    InvalidState {
        operation: String,
        state: RunState,
    },
    /// Percentage reduction requested against a zero control score.
    DivisionUndefined,
}

impl SimError {
    pub(crate) fn invalid_state(operation: &str, state: RunState) -> Self {
        SimError::InvalidState {
            operation: operation.to_string(),
            state,
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::OutOfBounds { x, z } => write!(f, "coordinate ({x}, {z}) is outside the grid"),
            SimError::AlreadyDeployed { x, z } => {
                write!(f, "an intervention is already deployed at ({x}, {z})")
            }
            SimError::InvalidState { operation, state } => {
                write!(f, "{operation} is not allowed while {state}")
            }
            SimError::DivisionUndefined => {
                write!(f, "percentage reduction is undefined for a control score of 0")
            }
        }
    }
}

impl std::error::Error for SimError {}
