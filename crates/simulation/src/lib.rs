//! Feral spread simulation engine.
//!
//! A fixed grid of urban cells carries a scalar "feral intensity" that spreads
//! turn by turn. The [`scenario::ScenarioRunner`] runs an unmitigated control
//! batch, lets an operator place interventions on the resulting grid, then
//! runs an intervention batch from that same grid and compares the scores.
//!
//! The engine is plain synchronous Rust; [`SimulationPlugin`] embeds it in a
//! bevy `App` with a command queue and per-batch snapshot publication.

use bevy::prelude::*;

pub mod agent_protocol;
pub mod ascii_map;
pub mod config;
pub mod error;
pub mod game_actions;
pub mod grid;
pub mod intervention;
pub mod scenario;
pub mod score;
pub mod sim_rng;
pub mod simulation_sets;
pub mod spread;
pub mod state_hash;
pub mod world_init;
pub mod world_snapshot;

pub use error::SimError;
pub use simulation_sets::SimulationSet;

use scenario::ScenarioRunner;
use state_hash::{update_state_hash, StateHash};
use world_snapshot::{publish_snapshot, BatchCompleted, LatestSnapshot};

/// Registers the engine resources, command executor and snapshot publication.
///
/// Insert a configured `ScenarioRunner` before adding the plugin to override
/// the default 50x50 grid; otherwise one is created from `SimConfig::default()`.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenarioRunner>()
            .init_resource::<LatestSnapshot>()
            .init_resource::<StateHash>()
            .add_event::<BatchCompleted>()
            .add_plugins((
                simulation_sets::SimulationSetsPlugin,
                game_actions::GameActionsPlugin,
            ))
            .add_systems(
                Update,
                (publish_snapshot, update_state_hash).in_set(SimulationSet::Publish),
            );
    }
}
