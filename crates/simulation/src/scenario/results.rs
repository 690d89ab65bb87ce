use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioName {
    Control,
    Intervention,
}

impl ScenarioName {
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioName::Control => "control",
            ScenarioName::Intervention => "intervention",
        }
    }
}

/// Outcome of one completed scenario batch. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct ScenarioResult {
    pub name: ScenarioName,
    pub turns_run: u32,
    pub final_score: i64,
}
