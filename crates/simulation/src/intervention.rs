//! Intervention placement on a [`GridState`].
//!
//! Only the `has_intervention` flag of the targeted cell is ever written;
//! all validation happens before that write.

use crate::error::SimError;
use crate::grid::GridState;

/// Mark `(x, z)` as hosting an intervention.
pub fn deploy_at(grid: &mut GridState, x: usize, z: usize) -> Result<(), SimError> {
    if !grid.in_bounds(x, z) {
        return Err(SimError::OutOfBounds { x, z });
    }
    let cell = grid.get_mut(x, z);
    if cell.has_intervention {
        return Err(SimError::AlreadyDeployed { x, z });
    }
    cell.has_intervention = true;
    Ok(())
}

/// The cell an automatic deployment would target.
///
/// Scans x-major with a strict `>` so ties go to the lowest `x`, then the
/// lowest `z`. When no cell is above zero the grid centre is returned.
pub fn auto_target(grid: &GridState) -> (usize, usize) {
    let mut best = grid.center();
    let mut max_intensity = 0.0_f32;

    for x in 0..grid.width {
        for z in 0..grid.height {
            let intensity = grid.get(x, z).feral_intensity;
            if intensity > max_intensity {
                max_intensity = intensity;
                best = (x, z);
            }
        }
    }

    best
}

/// Deploy at the most intense cell and return the chosen coordinate.
pub fn deploy_auto(grid: &mut GridState) -> Result<(usize, usize), SimError> {
    let (x, z) = auto_target(grid);
    deploy_at(grid, x, z)?;
    Ok((x, z))
}

/// Coordinates of every deployed intervention, in storage order.
pub fn deployed_sites(grid: &GridState) -> Vec<(usize, usize)> {
    grid.iter_cells()
        .filter(|(_, _, cell)| cell.has_intervention)
        .map(|(x, z, _)| (x, z))
        .collect()
}
