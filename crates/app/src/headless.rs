//! Default mode: run the control -> deploy -> intervention protocol once and
//! print the maps and scorecard.
//!
//! Commands go through the same `ActionQueue` the agent mode uses, so the
//! printed results match what an agent would see for the same seed.

use std::path::Path;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use save::{ExportFinished, ExportPlugin, ExportRunEvent};
use simulation::ascii_map::build_map;
use simulation::config::SimConfig;
use simulation::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use simulation::scenario::ScenarioRunner;
use simulation::world_snapshot::LatestSnapshot;

pub fn build_app(config: SimConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(LogPlugin::default());
    app.insert_resource(ScenarioRunner::new(config));
    app.add_plugins((simulation::SimulationPlugin, ExportPlugin));
    app.update();
    app
}

pub fn run_headless(
    config: SimConfig,
    at: Option<(u32, u32)>,
    export: Option<&Path>,
) -> Result<(), String> {
    let mut app = build_app(config);

    run_action(&mut app, GameAction::RunControl { turns: None })?;
    print_map(&app);

    run_action(&mut app, GameAction::DeployIntervention { at })?;
    run_action(&mut app, GameAction::RunIntervention { turns: None })?;
    print_map(&app);

    let runner = app.world().resource::<ScenarioRunner>();
    let card = runner
        .scorecard()
        .ok_or_else(|| "protocol finished without a scorecard".to_string())?;
    println!();
    println!("Control score:      {}", card.control_score);
    println!("Intervention score: {}", card.intervention_score);
    println!(
        "Reduction:          {} ({})",
        card.reduction,
        card.percent_label()
    );
    println!("Verdict:            {}", card.verdict);

    if let Some(path) = export {
        export_run(&mut app, path)?;
    }

    Ok(())
}

/// Queue one action, run a frame, and return its logged result.
fn run_action(app: &mut App, action: GameAction) -> Result<ActionResult, String> {
    app.world_mut()
        .resource_mut::<ActionQueue>()
        .push(ActionSource::Operator, action);
    app.update();

    let result = app
        .world()
        .resource::<ActionResultLog>()
        .last_result()
        .cloned()
        .ok_or_else(|| "executor did not record a result".to_string())?;
    match result.error() {
        Some(error) => Err(error.to_string()),
        None => Ok(result),
    }
}

fn print_map(app: &App) {
    let latest = app.world().resource::<LatestSnapshot>();
    println!("{}", build_map(&latest.snapshot));
}

fn export_run(app: &mut App, path: &Path) -> Result<(), String> {
    app.world_mut().send_event(ExportRunEvent {
        path: path.to_path_buf(),
    });
    app.update();

    let finished: Vec<ExportFinished> = app
        .world_mut()
        .resource_mut::<Events<ExportFinished>>()
        .drain()
        .collect();
    match finished.into_iter().next() {
        Some(ExportFinished { result: Ok(bytes), .. }) => {
            println!("Exported {bytes} bytes to {}", path.display());
            Ok(())
        }
        Some(ExportFinished { result: Err(message), .. }) => Err(message),
        None => Err("export request was not handled".to_string()),
    }
}
