use serde::{Deserialize, Serialize};

/// A control command issued to the scenario runner.
///
/// Turn counts of `None` fall back to the configured default (10).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    RunControl {
        #[serde(default)]
        turns: Option<u32>,
    },
    DeployIntervention {
        #[serde(default)]
        at: Option<(u32, u32)>,
    },
    RunIntervention {
        #[serde(default)]
        turns: Option<u32>,
    },
    /// Return to idle; a seed replaces the configured base seed.
    Reset {
        #[serde(default)]
        seed: Option<u64>,
    },
}
