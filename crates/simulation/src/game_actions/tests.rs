use super::*;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::scenario::{RunState, ScenarioName, ScenarioRunner};

fn runner() -> ScenarioRunner {
    ScenarioRunner::new(SimConfig::default().with_seed(3))
}

#[test]
fn test_game_action_serialization() {
    let action = GameAction::RunControl { turns: Some(12) };
    let json = serde_json::to_string(&action).unwrap();
    let decoded: GameAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);

    let action = GameAction::DeployIntervention { at: Some((4, 7)) };
    let json = serde_json::to_string(&action).unwrap();
    let decoded: GameAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);
}

#[test]
fn test_game_action_defaults_from_json() {
    let decoded: GameAction = serde_json::from_str(r#"{"type":"run_control"}"#).unwrap();
    assert_eq!(decoded, GameAction::RunControl { turns: None });

    let decoded: GameAction =
        serde_json::from_str(r#"{"type":"deploy_intervention","at":[25,25]}"#).unwrap();
    assert_eq!(decoded, GameAction::DeployIntervention { at: Some((25, 25)) });

    let decoded: GameAction = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
    assert_eq!(decoded, GameAction::Reset { seed: None });
}

#[test]
fn test_action_result_serialization() {
    let res = ActionResult::Deployed { x: 1, z: 2 };
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["outcome"], "deployed");
    let decoded: ActionResult = serde_json::from_value(json).unwrap();
    assert_eq!(res, decoded);

    let res = ActionResult::Error {
        error: SimError::OutOfBounds { x: 60, z: 0 },
    };
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["error"]["kind"], "out_of_bounds");
    let decoded: ActionResult = serde_json::from_value(json).unwrap();
    assert_eq!(res, decoded);
}

#[test]
fn test_execute_uses_default_turns() {
    let mut runner = runner();
    let result = execute_action(&GameAction::RunControl { turns: None }, &mut runner);
    let ActionResult::Scenario { result } = result else {
        panic!("expected scenario result");
    };
    assert_eq!(result.name, ScenarioName::Control);
    assert_eq!(result.turns_run, 10);
    assert_eq!(runner.turn(), 10);
}

#[test]
fn test_execute_full_protocol() {
    let mut runner = runner();
    assert!(execute_action(&GameAction::RunControl { turns: Some(4) }, &mut runner).is_success());

    let deployed = execute_action(
        &GameAction::DeployIntervention { at: Some((10, 11)) },
        &mut runner,
    );
    assert_eq!(deployed, ActionResult::Deployed { x: 10, z: 11 });

    let result = execute_action(&GameAction::RunIntervention { turns: Some(4) }, &mut runner);
    assert!(result.is_success());
    assert_eq!(runner.state(), RunState::Complete);
}

#[test]
fn test_execute_reports_errors_without_state_change() {
    let mut runner = runner();
    let result = execute_action(&GameAction::DeployIntervention { at: None }, &mut runner);
    assert!(matches!(
        result.error(),
        Some(SimError::InvalidState { state: RunState::Idle, .. })
    ));
    assert_eq!(runner.state(), RunState::Idle);

    execute_action(&GameAction::RunControl { turns: Some(1) }, &mut runner);
    let result = execute_action(
        &GameAction::DeployIntervention { at: Some((50, 0)) },
        &mut runner,
    );
    assert_eq!(result.error(), Some(&SimError::OutOfBounds { x: 50, z: 0 }));
    assert_eq!(runner.state(), RunState::ControlComplete);
    assert!(runner.interventions().is_empty());
}

#[test]
fn test_execute_reset_reports_seed() {
    let mut runner = runner();
    let result = execute_action(&GameAction::Reset { seed: Some(77) }, &mut runner);
    assert_eq!(result, ActionResult::Reset { seed: 77 });
    let result = execute_action(&GameAction::Reset { seed: None }, &mut runner);
    assert_eq!(result, ActionResult::Reset { seed: 77 });
}

#[test]
fn test_queue_source_is_preserved() {
    let mut queue = ActionQueue::default();
    queue.push(ActionSource::Agent, GameAction::Reset { seed: None });
    let drained = queue.drain();
    assert_eq!(drained[0].source, ActionSource::Agent);
    assert!(queue.is_empty());
}
