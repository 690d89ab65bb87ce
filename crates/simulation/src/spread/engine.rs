use crate::grid::GridState;

use super::calculations::{advance_intensity, cell_spread_rate, SpreadParams};

/// Computes one discrete turn of the spread rule over a whole grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpreadEngine {
    pub params: SpreadParams,
}

impl SpreadEngine {
    pub fn new(params: SpreadParams) -> Self {
        Self { params }
    }

    /// Return the next grid; `grid` itself is left untouched.
    pub fn step(&self, grid: &GridState) -> GridState {
        let mut next = GridState::default();
        self.step_into(grid, &mut next);
        next
    }

    /// Write the turn after `src` into `dst`, reusing `dst`'s allocation.
    ///
    /// Every rate is computed from `src` only, so the order in which cells
    /// are visited cannot bias the result.
    pub fn step_into(&self, src: &GridState, dst: &mut GridState) {
        dst.match_shape(src);
        if src.is_empty() {
            return;
        }

        for z in 0..src.height {
            for x in 0..src.width {
                let idx = src.index(x, z);
                let cell = src.cells[idx];
                let rate = cell_spread_rate(src, x, z, &self.params);
                dst.cells[idx] = cell;
                dst.cells[idx].feral_intensity = advance_intensity(cell.feral_intensity, rate);
            }
        }
    }

    /// Run `turns` steps, double-buffering between `grid` and `scratch`.
    /// On return `grid` holds the final state.
    pub fn run(&self, grid: &mut GridState, scratch: &mut GridState, turns: u32) {
        for _ in 0..turns {
            self.step_into(grid, scratch);
            std::mem::swap(grid, scratch);
        }
    }
}
