//! Agent text protocol types for the `--agent` headless mode.
//!
//! Defines the JSON command/response envelope that external programs (LLMs,
//! scripts, test harnesses) use to drive the scenario runner over
//! newline-delimited JSON on stdin/stdout.
//!
//! These types live in the `simulation` crate so they can be unit-tested
//! without pulling in the full app binary. The actual I/O loop lives in
//! `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::ascii_map::build_map;
use crate::game_actions::{ActionResult, GameAction};
use crate::scenario::{RunState, ScenarioResult, ScenarioRunner};
use crate::score::Scorecard;
use crate::world_snapshot::SnapshotCell;

/// Largest turn count a single agent command may request.
pub const MAX_TURNS_PER_BATCH: u32 = 10_000;

// ---------------------------------------------------------------------------
// Commands (stdin → simulation)
// ---------------------------------------------------------------------------

/// A single command sent by the external agent over stdin.
///
/// Each line of stdin is parsed as one `AgentCommand`. The `cmd` field acts as
/// the discriminator tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Request the current run observation. `map` adds the ASCII rendering.
    Observe {
        #[serde(default)]
        map: bool,
    },

    /// Execute a single action.
    Act { action: GameAction },

    /// Execute multiple actions in sequence.
    BatchAct { actions: Vec<GameAction> },

    /// Request the control vs. intervention comparison.
    Scorecard,

    /// Write a run export to `path`.
    Export { path: String },

    /// Return to idle, optionally with a new base seed.
    Reset {
        #[serde(default)]
        seed: Option<u64>,
    },

    /// Gracefully shut down the agent session.
    Quit,
}

/// Clamp agent-supplied turn counts to [`MAX_TURNS_PER_BATCH`].
pub fn cap_turns(action: GameAction) -> GameAction {
    let cap = |turns: Option<u32>| turns.map(|t| t.min(MAX_TURNS_PER_BATCH));
    match action {
        GameAction::RunControl { turns } => GameAction::RunControl { turns: cap(turns) },
        GameAction::RunIntervention { turns } => GameAction::RunIntervention { turns: cap(turns) },
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// Everything an agent needs to decide its next command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunObservation {
    pub state: RunState,
    pub turn: u32,
    pub cycle: u64,
    pub seed: u64,
    pub width: u32,
    pub height: u32,
    pub live_score: i64,
    pub control: Option<ScenarioResult>,
    pub intervention: Option<ScenarioResult>,
    pub interventions: Vec<(u32, u32)>,
    /// Cells above the visibility threshold, in storage order.
    pub visible_cells: Vec<SnapshotCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

impl RunObservation {
    pub fn from_runner(runner: &ScenarioRunner, include_map: bool) -> Self {
        let snapshot = runner.snapshot();
        Self {
            state: runner.state(),
            turn: runner.turn(),
            cycle: runner.cycle(),
            seed: runner.current_seed(),
            width: snapshot.width,
            height: snapshot.height,
            live_score: snapshot.live_score(),
            control: runner.control_result().cloned(),
            intervention: runner.intervention_result().cloned(),
            interventions: snapshot.interventions().map(|c| (c.x, c.z)).collect(),
            visible_cells: snapshot.visible_cells().copied().collect(),
            map: include_map.then(|| build_map(&snapshot)),
        }
    }
}

// ---------------------------------------------------------------------------
// Responses (simulation → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    /// Monotonically increasing protocol version (currently 1).
    pub protocol_version: u32,
    /// The response payload, flattened into this object.
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Tagged payload variants for agent responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// The simulation is ready to accept commands.
    Ready,

    /// A run observation.
    Observation { observation: RunObservation },

    /// Result of a single `act` command.
    ActionResult { result: ActionResult },

    /// Results of a `batch_act` command.
    BatchResult { results: Vec<ActionResult> },

    /// Comparison of the recorded control and intervention runs.
    Scorecard {
        scorecard: Scorecard,
        reduction_label: String,
    },

    /// Generic success acknowledgement (export, reset).
    Ok,

    /// An error occurred while processing the command.
    Error { message: String },

    /// The session is ending (response to `quit`).
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Convenience constructor that wraps a payload with the current protocol version.
pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

/// Scorecard payload for the runner, or an error if either run is missing.
pub fn scorecard_payload(runner: &ScenarioRunner) -> ResponsePayload {
    match runner.scorecard() {
        Some(scorecard) => ResponsePayload::Scorecard {
            reduction_label: scorecard.percent_label(),
            scorecard,
        },
        None => ResponsePayload::Error {
            message: format!(
                "scorecard needs both control and intervention results (state: {})",
                runner.state()
            ),
        },
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
