//! End-to-end protocol tests against the public API.
//!
//! Drives complete control -> deploy -> intervention runs, both directly on a
//! `ScenarioRunner` and through a bevy `App` with `SimulationPlugin`, and
//! checks the reproducibility guarantees across resets.
//!
//! Run: cargo test -p simulation --test scenario_protocol

use bevy::prelude::*;

use simulation::config::{ReseedPolicy, SimConfig};
use simulation::game_actions::{ActionQueue, ActionResultLog, ActionSource, GameAction};
use simulation::scenario::{RunState, ScenarioRunner};
use simulation::score::Verdict;
use simulation::state_hash::{grid_fingerprint, StateHash};
use simulation::world_snapshot::LatestSnapshot;
use simulation::{SimError, SimulationPlugin};

fn full_protocol(runner: &mut ScenarioRunner) -> (i64, i64) {
    let control = runner.run_control(10).expect("control from idle");
    runner.deploy_intervention(None).expect("auto deploy");
    let intervention = runner.run_intervention(10).expect("intervention after deploy");
    (control.final_score, intervention.final_score)
}

// ---------------------------------------------------------------------------
// 1. Direct runner
// ---------------------------------------------------------------------------

#[test]
fn test_full_protocol_produces_scorecard() {
    let mut runner = ScenarioRunner::new(SimConfig::default());
    let (control, intervention) = full_protocol(&mut runner);

    assert_eq!(runner.state(), RunState::Complete);
    assert_eq!(runner.turn(), 20);

    let card = runner.scorecard().expect("both runs recorded");
    assert_eq!(card.control_score, control);
    assert_eq!(card.intervention_score, intervention);
    assert_eq!(card.reduction, control - intervention);
    let expected = if intervention < control {
        Verdict::Effective
    } else {
        Verdict::Inconclusive
    };
    assert_eq!(card.verdict, expected);
}

#[test]
fn test_identical_seeds_identical_runs() {
    let config = SimConfig::default().with_seed(1234);
    let mut a = ScenarioRunner::new(config.clone());
    let mut b = ScenarioRunner::new(config);

    assert_eq!(grid_fingerprint(a.grid()), grid_fingerprint(b.grid()));
    assert_eq!(full_protocol(&mut a), full_protocol(&mut b));
    assert_eq!(grid_fingerprint(a.grid()), grid_fingerprint(b.grid()));
    assert_eq!(a.interventions(), b.interventions());
}

#[test]
fn test_fixed_reseed_repeats_after_reset() {
    let mut runner = ScenarioRunner::new(SimConfig::default());
    let first = full_protocol(&mut runner);
    runner.reset();
    assert_eq!(runner.state(), RunState::Idle);
    let second = full_protocol(&mut runner);
    assert_eq!(first, second);
}

#[test]
fn test_advance_reseed_changes_grid_after_reset() {
    let mut config = SimConfig::default();
    config.reseed = ReseedPolicy::Advance;
    let mut runner = ScenarioRunner::new(config);
    let before = grid_fingerprint(runner.grid());
    runner.reset();
    assert_eq!(runner.cycle(), 1);
    assert_eq!(runner.current_seed(), 43);
    assert_ne!(grid_fingerprint(runner.grid()), before);
}

#[test]
fn test_rejections_leave_runner_untouched() {
    let mut runner = ScenarioRunner::new(SimConfig::default());
    let before = grid_fingerprint(runner.grid());

    assert!(matches!(
        runner.run_intervention(10),
        Err(SimError::InvalidState { .. })
    ));
    assert!(matches!(
        runner.deploy_intervention(Some((0, 0))),
        Err(SimError::InvalidState { .. })
    ));
    assert_eq!(grid_fingerprint(runner.grid()), before);
    assert_eq!(runner.state(), RunState::Idle);

    full_protocol(&mut runner);
    assert!(matches!(
        runner.run_control(10),
        Err(SimError::InvalidState { .. })
    ));
}

// ---------------------------------------------------------------------------
// 2. Through the bevy App
// ---------------------------------------------------------------------------

#[test]
fn test_app_protocol_matches_direct_runner() {
    let config = SimConfig::default().with_seed(99);

    let mut app = App::new();
    app.insert_resource(ScenarioRunner::new(config.clone()));
    app.add_plugins(SimulationPlugin);
    app.update();

    {
        let mut queue = app.world_mut().resource_mut::<ActionQueue>();
        queue.push(ActionSource::Script, GameAction::RunControl { turns: None });
        queue.push(
            ActionSource::Script,
            GameAction::DeployIntervention { at: None },
        );
        queue.push(
            ActionSource::Script,
            GameAction::RunIntervention { turns: None },
        );
    }
    app.update();

    let log = app.world().resource::<ActionResultLog>();
    assert_eq!(log.len(), 3);
    assert!(log.last_n(3).iter().all(|(_, result)| result.is_success()));

    let mut direct = ScenarioRunner::new(config);
    full_protocol(&mut direct);

    let runner = app.world().resource::<ScenarioRunner>();
    assert_eq!(runner.scorecard(), direct.scorecard());

    let latest = app.world().resource::<LatestSnapshot>();
    assert_eq!(latest.snapshot.state, RunState::Complete);
    assert_eq!(latest.snapshot, direct.snapshot());

    let hash = app.world().resource::<StateHash>();
    assert_eq!(hash.hash, grid_fingerprint(direct.grid()));
}
