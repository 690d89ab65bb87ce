use serde::{Deserialize, Serialize};

use crate::spread::SpreadParams;

pub const GRID_WIDTH: usize = 50;
pub const GRID_HEIGHT: usize = 50;

/// Rows (inclusive) of the highway corridor running across the grid.
pub const HIGHWAY_Z_LOW: usize = 24;
pub const HIGHWAY_Z_HIGH: usize = 26;

/// Turns per scenario batch when the caller does not specify a count.
pub const DEFAULT_TURNS: u32 = 10;

/// Seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Intensity above which a cell counts as a visible feature for renderers.
pub const VISIBLE_INTENSITY: f32 = 0.1;

/// Inclusive band of `z` rows flagged as highway at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighwayBand {
    pub z_low: usize,
    pub z_high: usize,
}

impl HighwayBand {
    pub fn contains(&self, z: usize) -> bool {
        z >= self.z_low && z <= self.z_high
    }
}

impl Default for HighwayBand {
    fn default() -> Self {
        Self {
            z_low: HIGHWAY_Z_LOW,
            z_high: HIGHWAY_Z_HIGH,
        }
    }
}

/// How a reset picks the seed for the next initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReseedPolicy {
    /// Every cycle re-initializes from the same seed.
    #[default]
    Fixed,
    /// Each reset advances to `seed + cycle`, so successive cycles see
    /// different (but still reproducible) baselines.
    Advance,
}

/// Runtime configuration for a [`crate::scenario::ScenarioRunner`].
///
/// Every field has a default, so a JSON config file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub highway: HighwayBand,
    pub seed: u64,
    pub reseed: ReseedPolicy,
    pub default_turns: u32,
    pub spread: SpreadParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            highway: HighwayBand::default(),
            seed: DEFAULT_SEED,
            reseed: ReseedPolicy::default(),
            default_turns: DEFAULT_TURNS,
            spread: SpreadParams::default(),
        }
    }
}

impl SimConfig {
    /// Parse a configuration from JSON text. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
