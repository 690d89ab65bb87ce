use crate::config::{ReseedPolicy, SimConfig};
use crate::error::SimError;
use crate::scenario::{RunState, ScenarioName, ScenarioRunner};
use crate::score::Verdict;
use crate::state_hash::grid_fingerprint;

fn runner(seed: u64) -> ScenarioRunner {
    ScenarioRunner::new(SimConfig::default().with_seed(seed))
}

fn run_protocol(runner: &mut ScenarioRunner) -> (i64, i64) {
    let control = runner.run_control(10).unwrap();
    runner.deploy_intervention(None).unwrap();
    let intervention = runner.run_intervention(10).unwrap();
    (control.final_score, intervention.final_score)
}

#[test]
fn test_new_runner_is_idle() {
    let r = runner(1);
    assert_eq!(r.state(), RunState::Idle);
    assert_eq!(r.turn(), 0);
    assert!(r.control_result().is_none());
    assert!(r.intervention_result().is_none());
    assert!(r.scorecard().is_none());
}

#[test]
fn test_full_protocol() {
    let mut r = runner(42);

    let control = r.run_control(10).unwrap();
    assert_eq!(control.name, ScenarioName::Control);
    assert_eq!(control.turns_run, 10);
    assert_eq!(r.state(), RunState::ControlComplete);
    assert_eq!(r.turn(), 10);
    assert_eq!(control.final_score, r.live_score());

    let site = r.deploy_intervention(None).unwrap();
    assert_eq!(r.state(), RunState::InterventionReady);
    assert_eq!(r.interventions(), vec![site]);

    let intervention = r.run_intervention(10).unwrap();
    assert_eq!(intervention.name, ScenarioName::Intervention);
    assert_eq!(r.state(), RunState::Complete);
    assert_eq!(r.turn(), 20);

    // The intervention run continues from the control grid, so spread only grows.
    assert!(intervention.final_score > control.final_score);

    let card = r.scorecard().unwrap();
    assert_eq!(card.control_score, control.final_score);
    assert_eq!(card.intervention_score, intervention.final_score);
    assert_eq!(card.reduction, control.final_score - intervention.final_score);
    assert_eq!(card.verdict, Verdict::Inconclusive);
}

#[test]
fn test_deploy_before_control_is_invalid_state() {
    let mut r = runner(1);
    let before = r.grid().clone();
    let err = r.deploy_intervention(None).unwrap_err();
    assert!(matches!(err, SimError::InvalidState { state: RunState::Idle, .. }));
    assert_eq!(r.grid(), &before);
    assert_eq!(r.state(), RunState::Idle);
}

#[test]
fn test_run_intervention_before_deploy_is_invalid_state() {
    let mut r = runner(1);
    assert!(matches!(
        r.run_intervention(10),
        Err(SimError::InvalidState { state: RunState::Idle, .. })
    ));

    r.run_control(10).unwrap();
    let before = r.grid().clone();
    assert!(matches!(
        r.run_intervention(10),
        Err(SimError::InvalidState { state: RunState::ControlComplete, .. })
    ));
    assert_eq!(r.grid(), &before);
    assert_eq!(r.turn(), 10);
}

#[test]
fn test_control_runs_once_per_cycle() {
    let mut r = runner(1);
    let first = r.run_control(10).unwrap();
    let generation = r.generation();
    assert!(matches!(
        r.run_control(10),
        Err(SimError::InvalidState { state: RunState::ControlComplete, .. })
    ));
    assert_eq!(r.control_result(), Some(&first));
    assert_eq!(r.generation(), generation);
}

#[test]
fn test_nothing_runs_after_complete() {
    let mut r = runner(3);
    run_protocol(&mut r);
    assert!(r.run_control(10).is_err());
    assert!(r.deploy_intervention(None).is_err());
    assert!(r.run_intervention(10).is_err());
    assert_eq!(r.state(), RunState::Complete);
}

#[test]
fn test_reset_from_every_state() {
    let mut r = runner(5);
    let fresh = r.grid().clone();

    r.reset();
    assert_eq!(r.state(), RunState::Idle);

    r.run_control(4).unwrap();
    r.reset();
    assert_eq!(r.state(), RunState::Idle);

    r.run_control(4).unwrap();
    r.deploy_intervention(Some((3, 3))).unwrap();
    r.reset();
    assert_eq!(r.state(), RunState::Idle);
    assert!(r.interventions().is_empty());

    run_protocol(&mut r);
    let grid = r.reset().clone();
    assert_eq!(r.state(), RunState::Idle);
    assert_eq!(r.turn(), 0);
    assert!(r.control_result().is_none());
    assert!(r.intervention_result().is_none());
    // Fixed reseed policy: every cycle starts from the same grid.
    assert_eq!(grid, fresh);
}

#[test]
fn test_advance_policy_changes_grid_each_reset() {
    let config = SimConfig {
        reseed: ReseedPolicy::Advance,
        ..SimConfig::default()
    };
    let mut r = ScenarioRunner::new(config);
    let first = r.grid().clone();
    r.reset();
    assert_eq!(r.current_seed(), 43);
    assert_ne!(r.grid(), &first);
}

#[test]
fn test_reset_with_seed_matches_fresh_runner() {
    let mut r = runner(1);
    run_protocol(&mut r);
    r.reset_with_seed(77);
    assert_eq!(r.grid(), runner(77).grid());
}

#[test]
fn test_identical_commands_give_identical_results() {
    let mut a = runner(2024);
    let mut b = runner(2024);
    assert_eq!(run_protocol(&mut a), run_protocol(&mut b));
    assert_eq!(grid_fingerprint(a.grid()), grid_fingerprint(b.grid()));
}

#[test]
fn test_control_reinitializes_after_reset() {
    let mut a = runner(9);
    let mut b = runner(9);
    a.run_control(10).unwrap();
    a.reset();
    let again = a.run_control(10).unwrap();
    let once = b.run_control(10).unwrap();
    assert_eq!(again, once);
}

#[test]
fn test_manual_deploy_validation() {
    let mut r = runner(1);
    r.run_control(2).unwrap();

    assert_eq!(
        r.deploy_intervention(Some((50, 0))),
        Err(SimError::OutOfBounds { x: 50, z: 0 })
    );
    assert_eq!(r.state(), RunState::ControlComplete);

    assert_eq!(r.deploy_intervention(Some((10, 10))), Ok((10, 10)));
    assert_eq!(
        r.deploy_intervention(Some((10, 10))),
        Err(SimError::AlreadyDeployed { x: 10, z: 10 })
    );
    assert_eq!(r.deploy_intervention(Some((11, 10))), Ok((11, 10)));
    assert_eq!(r.interventions(), vec![(10, 10), (11, 10)]);
}

#[test]
fn test_intervention_run_beats_untreated_continuation() {
    // Same post-control grid, continued with and without a deployment.
    let mut treated = runner(8);
    treated.run_control(10).unwrap();
    let mut untreated_grid = treated.grid().clone();

    treated.deploy_intervention(None).unwrap();
    let treated_score = treated.run_intervention(10).unwrap().final_score;

    let mut scratch = crate::grid::GridState::default();
    crate::spread::SpreadEngine::default().run(&mut untreated_grid, &mut scratch, 10);
    let untreated_score = crate::score::score(&untreated_grid);

    assert!(treated_score <= untreated_score);
}

#[test]
fn test_zero_turn_batches() {
    let mut r = runner(4);
    let initial = crate::score::score(r.grid());
    let control = r.run_control(0).unwrap();
    assert_eq!(control.final_score, initial);
    assert_eq!(r.turn(), 0);
}

#[test]
fn test_empty_grid_protocol() {
    let config = SimConfig {
        width: 0,
        height: 0,
        ..SimConfig::default()
    };
    let mut r = ScenarioRunner::new(config);
    assert_eq!(r.run_control(10).unwrap().final_score, 0);
    assert_eq!(
        r.deploy_intervention(None),
        Err(SimError::OutOfBounds { x: 0, z: 0 })
    );
    assert_eq!(r.state(), RunState::ControlComplete);
}

#[test]
fn test_snapshot_reflects_post_batch_grid() {
    let mut r = runner(6);
    r.run_control(10).unwrap();
    let snap = r.snapshot();
    assert_eq!(snap.turn, 10);
    assert_eq!(snap.state, RunState::ControlComplete);
    assert_eq!(snap.cells.len(), 50 * 50);
    assert_eq!(snap.live_score(), r.control_result().unwrap().final_score);
}
