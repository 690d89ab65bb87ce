//! Action executor system: drains the [`ActionQueue`] each update and applies
//! every queued [`GameAction`] to the [`ScenarioRunner`], recording results in
//! the [`ActionResultLog`].
//!
//! The runner is the only thing this system mutates, and each action runs to
//! completion (a whole batch of turns) before the next one starts.

use bevy::prelude::*;

use crate::scenario::ScenarioRunner;

use super::result_log::ActionResultLog;
use super::{ActionQueue, ActionResult, GameAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut runner: ResMut<ScenarioRunner>,
) {
    for queued in queue.drain() {
        debug!("Executing {:?} from {:?}", queued.action, queued.source);
        let result = execute_action(&queued.action, &mut runner);
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Apply one action to the runner and report what happened.
pub fn execute_action(action: &GameAction, runner: &mut ScenarioRunner) -> ActionResult {
    let outcome = match action {
        GameAction::RunControl { turns } => {
            let turns = turns.unwrap_or(runner.default_turns());
            runner
                .run_control(turns)
                .map(|result| ActionResult::Scenario { result })
        }
        GameAction::DeployIntervention { at } => {
            let at = at.map(|(x, z)| (x as usize, z as usize));
            runner
                .deploy_intervention(at)
                .map(|(x, z)| ActionResult::Deployed {
                    x: x as u32,
                    z: z as u32,
                })
        }
        GameAction::RunIntervention { turns } => {
            let turns = turns.unwrap_or(runner.default_turns());
            runner
                .run_intervention(turns)
                .map(|result| ActionResult::Scenario { result })
        }
        GameAction::Reset { seed } => {
            match seed {
                Some(seed) => runner.reset_with_seed(*seed),
                None => runner.reset(),
            };
            Ok(ActionResult::Reset {
                seed: runner.current_seed(),
            })
        }
    };

    outcome.unwrap_or_else(|error| ActionResult::Error { error })
}
