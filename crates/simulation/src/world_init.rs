//! Grid initialization: vulnerability draws, highway corridor and the
//! starting feral presence.

use rand::Rng;

use crate::config::{HighwayBand, SimConfig};
use crate::grid::{Cell, GridState};
use crate::sim_rng::SimRng;

/// Upper bound (exclusive) of the baseline vulnerability draw.
pub const BASE_VULNERABILITY_MAX: f32 = 0.3;

/// Extra vulnerability for cells inside the highway band.
pub const HIGHWAY_VULNERABILITY_BONUS: f32 = 0.2;

/// Starting intensity range for highway cells.
pub const HIGHWAY_INTENSITY_MIN: f32 = 0.6;
pub const HIGHWAY_INTENSITY_MAX: f32 = 0.8;

/// Starting intensity range (from zero) for every other cell.
pub const BASE_INTENSITY_MAX: f32 = 0.2;

/// Build a fresh grid. Cells are drawn in storage order, vulnerability
/// first, so a given seed always yields the same grid.
pub fn initialize_grid(
    width: usize,
    height: usize,
    highway: HighwayBand,
    rng: &mut SimRng,
) -> GridState {
    let mut grid = GridState::new(width, height);

    for z in 0..height {
        let is_highway = highway.contains(z);
        for x in 0..width {
            let mut vulnerability = rng.0.gen_range(0.0..BASE_VULNERABILITY_MAX);
            let feral_intensity = if is_highway {
                vulnerability += HIGHWAY_VULNERABILITY_BONUS;
                rng.0.gen_range(HIGHWAY_INTENSITY_MIN..HIGHWAY_INTENSITY_MAX)
            } else {
                rng.0.gen_range(0.0..BASE_INTENSITY_MAX)
            };

            *grid.get_mut(x, z) = Cell {
                feral_intensity,
                vulnerability,
                has_intervention: false,
                is_highway,
            };
        }
    }

    grid
}

/// Initialize a grid from a config and an explicit seed.
pub fn initialize_from_config(config: &SimConfig, seed: u64) -> GridState {
    let mut rng = SimRng::from_seed_u64(seed);
    initialize_grid(config.width, config.height, config.highway, &mut rng)
}
