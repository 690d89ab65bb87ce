//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`simulation::agent_protocol`] for the full schema.
//! Log output and status lines go to stderr so stdout stays pure JSON.

use std::io::{BufRead, Write};
use std::path::Path;

use bevy::prelude::*;

use simulation::agent_protocol::{
    cap_turns, make_response, scorecard_payload, AgentCommand, AgentResponse, ResponsePayload,
    RunObservation, PROTOCOL_VERSION,
};
use simulation::config::SimConfig;
use simulation::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use simulation::scenario::ScenarioRunner;

use crate::headless::build_app;

pub fn run_agent_mode(config: SimConfig) {
    let mut app = build_app(config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    // Send the "ready" message so the external program knows we are live.
    write_response(&mut stdout, &make_response(ResponsePayload::Ready));
    eprintln!("feralsim agent mode v{PROTOCOL_VERSION} ready, waiting for commands on stdin");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<AgentCommand>(&line) {
            Ok(cmd) => process_command(cmd, &mut app),
            Err(e) => make_response(ResponsePayload::Error {
                message: format!("Parse error: {e}"),
            }),
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    eprintln!("feralsim agent mode shutting down");
}

fn write_response(out: &mut impl Write, response: &AgentResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            let _ = writeln!(out, "{json}");
            let _ = out.flush();
        }
        Err(e) => eprintln!("failed to encode response: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    match cmd {
        AgentCommand::Observe { map } => {
            let runner = app.world().resource::<ScenarioRunner>();
            make_response(ResponsePayload::Observation {
                observation: RunObservation::from_runner(runner, map),
            })
        }

        AgentCommand::Act { action } => match execute(app, action) {
            Ok(result) => make_response(ResponsePayload::ActionResult { result }),
            Err(message) => make_response(ResponsePayload::Error { message }),
        },

        AgentCommand::BatchAct { actions } => {
            let results: Result<Vec<_>, _> = actions
                .into_iter()
                .map(|action| execute(app, action))
                .collect();
            match results {
                Ok(results) => make_response(ResponsePayload::BatchResult { results }),
                Err(message) => make_response(ResponsePayload::Error { message }),
            }
        }

        AgentCommand::Scorecard => {
            make_response(scorecard_payload(app.world().resource::<ScenarioRunner>()))
        }

        AgentCommand::Export { path } => {
            let runner = app.world().resource::<ScenarioRunner>();
            match save::write_export(Path::new(&path), runner) {
                Ok(_) => make_response(ResponsePayload::Ok),
                Err(e) => make_response(ResponsePayload::Error {
                    message: e.to_string(),
                }),
            }
        }

        AgentCommand::Reset { seed } => match execute(app, GameAction::Reset { seed }) {
            Ok(ActionResult::Error { error }) => make_response(ResponsePayload::Error {
                message: error.to_string(),
            }),
            Ok(_) => make_response(ResponsePayload::Ok),
            Err(message) => make_response(ResponsePayload::Error { message }),
        },

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

/// Queue one action and run a frame so the executor handles it.
fn execute(app: &mut App, action: GameAction) -> Result<ActionResult, String> {
    app.world_mut()
        .resource_mut::<ActionQueue>()
        .push(ActionSource::Agent, cap_turns(action));
    app.update();

    app.world()
        .resource::<ActionResultLog>()
        .last_result()
        .cloned()
        .ok_or_else(|| "executor did not record a result".to_string())
}
