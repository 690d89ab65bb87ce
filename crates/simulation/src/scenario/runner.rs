use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::grid::GridState;
use crate::intervention::{deploy_at, deploy_auto, deployed_sites};
use crate::score::{score, Scorecard};
use crate::sim_rng::cycle_seed;
use crate::spread::SpreadEngine;
use crate::world_init::initialize_from_config;
use crate::world_snapshot::GridSnapshot;

use super::results::{ScenarioName, ScenarioResult};
use super::state::RunState;

/// Owns the grid and drives the control -> intervention protocol.
///
/// This is the only place simulation state lives. Collaborators get
/// read-only [`GridSnapshot`]s and issue commands through the methods below;
/// a batch of turns runs to completion inside a single call.
#[derive(Resource, Debug, Clone)]
pub struct ScenarioRunner {
    config: SimConfig,
    engine: SpreadEngine,
    grid: GridState,
    /// Back buffer for double-buffered stepping.
    scratch: GridState,
    state: RunState,
    /// Number of resets since construction (or since the last reseed).
    cycle: u64,
    /// Turns executed since the last reset.
    turn: u32,
    control: Option<ScenarioResult>,
    intervention: Option<ScenarioResult>,
    /// Bumped on every externally visible change.
    generation: u64,
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl ScenarioRunner {
    pub fn new(config: SimConfig) -> Self {
        let seed = cycle_seed(config.seed, 0, config.reseed);
        let grid = initialize_from_config(&config, seed);
        Self {
            engine: SpreadEngine::new(config.spread),
            config,
            grid,
            scratch: GridState::default(),
            state: RunState::Idle,
            cycle: 0,
            turn: 0,
            control: None,
            intervention: None,
            generation: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Re-initialize the grid and run the unmitigated baseline.
    pub fn run_control(&mut self, turns: u32) -> Result<ScenarioResult, SimError> {
        if !self.state.can_run_control() {
            return Err(self.reject("run_control"));
        }

        self.grid = initialize_from_config(&self.config, self.current_seed());
        self.turn = 0;
        self.transition(RunState::ControlRunning);
        let result = self.run_batch(ScenarioName::Control, turns);
        self.control = Some(result.clone());
        self.transition(RunState::ControlComplete);
        Ok(result)
    }

    /// Place an intervention on the post-control grid. `None` picks the most
    /// intense cell automatically.
    pub fn deploy_intervention(
        &mut self,
        at: Option<(usize, usize)>,
    ) -> Result<(usize, usize), SimError> {
        if !self.state.can_deploy() {
            return Err(self.reject("deploy_intervention"));
        }

        let site = match at {
            Some((x, z)) => deploy_at(&mut self.grid, x, z).map(|()| (x, z)),
            None => deploy_auto(&mut self.grid),
        };
        let (x, z) = site.inspect_err(|err| warn!("deploy_intervention rejected: {err}"))?;

        info!("Intervention deployed at ({x}, {z})");
        self.generation += 1;
        self.transition(RunState::InterventionReady);
        Ok((x, z))
    }

    /// Continue from the intervention-marked grid for `turns` more turns.
    pub fn run_intervention(&mut self, turns: u32) -> Result<ScenarioResult, SimError> {
        if !self.state.can_run_intervention() {
            return Err(self.reject("run_intervention"));
        }

        self.transition(RunState::InterventionRunning);
        let result = self.run_batch(ScenarioName::Intervention, turns);
        self.intervention = Some(result.clone());
        self.transition(RunState::Complete);
        Ok(result)
    }

    /// Return to `Idle` with a freshly initialized grid. Never fails.
    pub fn reset(&mut self) -> &GridState {
        self.cycle = self.cycle.wrapping_add(1);
        self.reinitialize();
        &self.grid
    }

    /// Reset using `seed` as the new base seed.
    pub fn reset_with_seed(&mut self, seed: u64) -> &GridState {
        self.config.seed = seed;
        self.cycle = 0;
        self.reinitialize();
        &self.grid
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_grid(&self.grid, self.turn, self.state)
    }

    /// Comparison of both runs, once both have been recorded.
    pub fn scorecard(&self) -> Option<Scorecard> {
        match (&self.control, &self.intervention) {
            (Some(control), Some(intervention)) => Some(Scorecard::compare(
                control.final_score,
                intervention.final_score,
            )),
            _ => None,
        }
    }

    /// Score of whatever grid is current. Not authoritative: recorded
    /// results carry the scores that count.
    pub fn live_score(&self) -> i64 {
        score(&self.grid)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn default_turns(&self) -> u32 {
        self.config.default_turns
    }

    pub fn control_result(&self) -> Option<&ScenarioResult> {
        self.control.as_ref()
    }

    pub fn intervention_result(&self) -> Option<&ScenarioResult> {
        self.intervention.as_ref()
    }

    pub fn interventions(&self) -> Vec<(usize, usize)> {
        deployed_sites(&self.grid)
    }

    /// Seed the current cycle initializes from.
    pub fn current_seed(&self) -> u64 {
        cycle_seed(self.config.seed, self.cycle, self.config.reseed)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn run_batch(&mut self, name: ScenarioName, turns: u32) -> ScenarioResult {
        self.engine.run(&mut self.grid, &mut self.scratch, turns);
        self.turn = self.turn.saturating_add(turns);
        self.generation += 1;

        let result = ScenarioResult {
            name,
            turns_run: turns,
            final_score: score(&self.grid),
        };
        info!(
            "{} scenario finished: {} turns, score {}",
            name.as_str(),
            turns,
            result.final_score
        );
        result
    }

    fn reinitialize(&mut self) {
        self.grid = initialize_from_config(&self.config, self.current_seed());
        self.control = None;
        self.intervention = None;
        self.turn = 0;
        self.generation += 1;
        self.transition(RunState::Idle);
        info!("Simulation reset (seed {})", self.current_seed());
    }

    fn transition(&mut self, next: RunState) {
        if self.state != next {
            debug!("Run state {} -> {}", self.state, next);
            self.state = next;
        }
    }

    fn reject(&self, operation: &str) -> SimError {
        warn!("{operation} rejected while {}", self.state);
        SimError::invalid_state(operation, self.state)
    }
}
