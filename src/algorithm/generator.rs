//! Randomized recursive backtracker carving a perfect maze
//!
//! Walks the odd-coordinate lattice two cells at a time with an explicit stack,
//! opening the wall between each cell and a randomly chosen unvisited
//! neighbour. The opened corridors form a spanning tree, so every pair of open
//! cells is joined by exactly one simple path.

use log::debug;

use crate::algorithm::random::RandomSource;
use crate::spatial::{CellType, Coord, Grid, Phase};

/// Distance between neighbouring lattice cells
pub const CARVE_STRIDE: usize = 2;

/// Lattice cell the carving walk starts from
pub const CARVE_ORIGIN: Coord = Coord::new(1, 1);

/// Work performed by a carving pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarveSummary {
    /// Lattice cells available when carving started
    pub lattice_cells: usize,
    /// Walls opened between lattice cells
    pub opened_walls: usize,
    /// Walks restarted from an unreached passage after the stack ran dry
    pub restarts: usize,
}

/// Carve a perfect maze into the grid and open its entrance and exit
///
/// Mutates the grid in place. `visited` flags are cleared first and left set
/// on every reached cell; the grid phase becomes [`Phase::Carved`].
pub fn carve<R: RandomSource>(grid: &mut Grid, random: &mut R) -> CarveSummary {
    grid.clear_visited();

    let mut summary = CarveSummary {
        lattice_cells: grid.count(CellType::Passage),
        ..CarveSummary::default()
    };
    let mut stack = Vec::with_capacity(summary.lattice_cells);
    let mut current = CARVE_ORIGIN;
    grid.mark_visited(current);

    loop {
        let neighbors = grid.unvisited_neighbors(current, CARVE_STRIDE);
        if let Some(&next) = random.choose(&neighbors) {
            stack.push(current);
            if grid.open_between(current, next).is_some() {
                summary.opened_walls += 1;
            }
            grid.mark_visited(next);
            current = next;
        } else if let Some(previous) = stack.pop() {
            current = previous;
        } else if let Some(unreached) = grid.first_unvisited_passage() {
            // Only hand-built grids can leave lattice cells cut off from the origin
            debug!("Restarting carve from unreached cell {unreached}");
            grid.mark_visited(unreached);
            summary.restarts += 1;
            current = unreached;
        } else {
            break;
        }
    }

    open_entrances(grid);
    grid.set_phase(Phase::Carved);

    debug!(
        "Carved {}x{} grid: {} lattice cells, {} walls opened, {} restarts",
        grid.width(),
        grid.height(),
        summary.lattice_cells,
        summary.opened_walls,
        summary.restarts
    );

    summary
}

/// Force the entrance and exit openings in the border to passages
pub fn open_entrances(grid: &mut Grid) {
    let entrance = grid.entrance();
    let exit = grid.exit();
    grid.set_cell_type(entrance, CellType::Passage);
    grid.set_cell_type(exit, CellType::Passage);
}
