use serde::{Deserialize, Serialize};

/// One urban cell of the spread grid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Current severity, always within `[0, 1]`.
    pub feral_intensity: f32,
    /// Fixed susceptibility, set at initialization.
    pub vulnerability: f32,
    pub has_intervention: bool,
    pub is_highway: bool,
}

/// Fixed-size `width x height` grid addressed by `(x, z)`.
///
/// Storage is row-major over `z`: `cells[z * width + x]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridState {
    pub cells: Vec<Cell>,
    pub width: usize,
    pub height: usize,
}

impl GridState {
    /// A grid of default (all-zero, no highway, no intervention) cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn index(&self, x: usize, z: usize) -> usize {
        z * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, z: usize) -> bool {
        x < self.width && z < self.height
    }

    #[inline]
    pub fn get(&self, x: usize, z: usize) -> &Cell {
        &self.cells[self.index(x, z)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, z: usize) -> &mut Cell {
        let idx = self.index(x, z);
        &mut self.cells[idx]
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Centre cell, rounding down. Out of bounds on an empty grid.
    pub fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// Orthogonal (N/S/E/W) neighbours that exist on the grid. No wraparound.
    pub fn neighbors4(&self, x: usize, z: usize) -> ([(usize, usize); 4], usize) {
        let mut result = [(0, 0); 4];
        let mut count = 0;
        if x > 0 {
            result[count] = (x - 1, z);
            count += 1;
        }
        if x + 1 < self.width {
            result[count] = (x + 1, z);
            count += 1;
        }
        if z > 0 {
            result[count] = (x, z - 1);
            count += 1;
        }
        if z + 1 < self.height {
            result[count] = (x, z + 1);
            count += 1;
        }
        (result, count)
    }

    /// Iterate `(x, z, &Cell)` in storage order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % width, idx / width, cell))
    }

    /// Make `self` the same shape as `other`, reusing the allocation.
    pub(crate) fn match_shape(&mut self, other: &GridState) {
        self.width = other.width;
        self.height = other.height;
        self.cells.resize(other.cells.len(), Cell::default());
    }
}
