use serde::{Deserialize, Serialize};

use crate::grid::GridState;

use super::constants::*;

/// Coefficients of the per-turn spread rule.
///
/// Defaults reproduce the reference rule; config files may override any of
/// them for sensitivity experiments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadParams {
    pub vulnerability_factor: f32,
    pub highway_multiplier: f32,
    pub contagion_per_neighbor: f32,
    pub contagion_threshold: f32,
    pub local_damping: f32,
    pub adjacent_damping: f32,
}

impl Default for SpreadParams {
    fn default() -> Self {
        Self {
            vulnerability_factor: VULNERABILITY_FACTOR,
            highway_multiplier: HIGHWAY_MULTIPLIER,
            contagion_per_neighbor: CONTAGION_PER_NEIGHBOR,
            contagion_threshold: CONTAGION_THRESHOLD,
            local_damping: LOCAL_INTERVENTION_DAMPING,
            adjacent_damping: ADJACENT_INTERVENTION_DAMPING,
        }
    }
}

/// Spread rate for the cell at `(x, z)`, reading only `grid`.
///
/// 1. **Baseline** -- `vulnerability * 0.1`, multiplied by 2.2 on highway cells.
/// 2. **Contagion** -- `+0.02` per orthogonal neighbour with intensity > 0.5.
/// 3. **Local intervention** -- rate `*= 0.3`.
/// 4. **Adjacent intervention** -- rate `*= 0.5`, stacking with (3).
pub fn cell_spread_rate(grid: &GridState, x: usize, z: usize, params: &SpreadParams) -> f32 {
    let cell = grid.get(x, z);

    let mut base = cell.vulnerability * params.vulnerability_factor;
    if cell.is_highway {
        base *= params.highway_multiplier;
    }

    let (neighbors, count) = grid.neighbors4(x, z);
    let mut contagious: u32 = 0;
    let mut protected = false;
    for &(nx, nz) in &neighbors[..count] {
        let n = grid.get(nx, nz);
        if n.feral_intensity > params.contagion_threshold {
            contagious += 1;
        }
        protected |= n.has_intervention;
    }

    let mut rate = base + params.contagion_per_neighbor * contagious as f32;

    if cell.has_intervention {
        rate *= params.local_damping;
    }
    if protected {
        rate *= params.adjacent_damping;
    }

    rate
}

/// Apply a rate to an intensity, keeping the result inside `[0, 1]`.
#[inline]
pub fn advance_intensity(intensity: f32, rate: f32) -> f32 {
    (intensity + rate).clamp(0.0, 1.0)
}
