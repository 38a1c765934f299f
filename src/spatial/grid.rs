//! Maze grid with the odd-coordinate cell lattice and the shared visited flags
//!
//! Cells at odd,odd coordinates strictly inside the border are the walkable
//! lattice; every other position starts as a wall. Corridors are carved by
//! opening the wall cell lying between two lattice cells.

use ndarray::Array2;

use crate::io::configuration::MIN_DIMENSION;
use crate::io::error::{MazeError, Result};
use crate::spatial::cell::{Cell, CellType, Coord};

/// Lifecycle of a grid, used to keep generation and solve passes apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Freshly constructed, nothing carved yet
    #[default]
    Unbuilt,
    /// Carved and holding no solver markings
    Carved,
    /// A solver is walking the grid
    Solving,
    /// A solver reached the exit
    Solved,
    /// A solver ran out of cells without reaching the exit
    Unsolvable,
}

/// Rectangular grid of cells, stored row-major and indexed by [`Coord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    phase: Phase,
}

impl Grid {
    /// Create a grid with the lattice cells open and everything else walled
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimension`] if either dimension is below 3
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(MazeError::InvalidDimension {
                width,
                height,
                minimum: MIN_DIMENSION,
            });
        }

        let cells = Array2::from_shape_fn((height, width), |(y, x)| {
            let on_lattice = x % 2 == 1 && y % 2 == 1 && x < width - 1 && y < height - 1;
            let cell_type = if on_lattice {
                CellType::Passage
            } else {
                CellType::Wall
            };
            Cell::new(Coord::new(x, y), cell_type)
        });

        Ok(Self {
            cells,
            phase: Phase::Unbuilt,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Current lifecycle phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) const fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Opening in the left border, one row below the top
    pub const fn entrance(&self) -> Coord {
        Coord::new(0, 1)
    }

    /// Opening in the bottom border, one column left of the right edge
    pub fn exit(&self) -> Coord {
        Coord::new(self.width() - 2, self.height() - 1)
    }

    /// Whether the coordinate lies inside the grid
    pub fn contains(&self, at: Coord) -> bool {
        at.x < self.width() && at.y < self.height()
    }

    /// Cell at the given position
    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        self.cells.get([at.y, at.x])
    }

    /// Mutable cell at the given position
    pub fn cell_mut(&mut self, at: Coord) -> Option<&mut Cell> {
        self.cells.get_mut([at.y, at.x])
    }

    /// Type of the cell at the given position
    pub fn cell_type(&self, at: Coord) -> Option<CellType> {
        self.cell(at).map(|cell| cell.cell_type)
    }

    /// Overwrite the type of a cell, returning whether the position exists
    ///
    /// Mostly useful to hand-build grids; the generator and the solver keep
    /// their own bookkeeping through [`Grid::open_between`] and the solver.
    pub fn set_cell_type(&mut self, at: Coord, cell_type: CellType) -> bool {
        if let Some(cell) = self.cell_mut(at) {
            cell.cell_type = cell_type;
            true
        } else {
            false
        }
    }

    /// Mark a cell as visited, returning whether the position exists
    pub fn mark_visited(&mut self, at: Coord) -> bool {
        if let Some(cell) = self.cell_mut(at) {
            cell.visited = true;
            true
        } else {
            false
        }
    }

    /// Whether the cell exists and is not a wall
    pub fn is_open(&self, at: Coord) -> bool {
        self.cell(at).is_some_and(|cell| cell.cell_type.is_open())
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Count cells of the given type
    pub fn count(&self, cell_type: CellType) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.cell_type == cell_type)
            .count()
    }

    /// Number of odd,odd lattice positions strictly inside the border
    pub fn lattice_cells(&self) -> usize {
        ((self.width() - 1) / 2) * ((self.height() - 1) / 2)
    }

    /// Clear every `visited` flag without touching cell types
    pub fn clear_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// Remove all solver markings
    ///
    /// Every non-wall cell becomes [`CellType::Passage`] and every `visited`
    /// flag is cleared. Calling it repeatedly has no further effect.
    pub fn reset_for_solve(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
            if cell.cell_type.is_open() {
                cell.cell_type = CellType::Passage;
            }
        }

        if matches!(self.phase, Phase::Solving | Phase::Solved | Phase::Unsolvable) {
            self.phase = Phase::Carved;
        }
    }

    /// Unvisited open cells `distance` steps away in the four axis directions
    ///
    /// Candidates are checked in the order down, up, right, left.
    pub fn unvisited_neighbors(&self, at: Coord, distance: usize) -> Vec<Coord> {
        let candidates = [
            at.y.checked_add(distance).map(|y| Coord::new(at.x, y)),
            at.y.checked_sub(distance).map(|y| Coord::new(at.x, y)),
            at.x.checked_add(distance).map(|x| Coord::new(x, at.y)),
            at.x.checked_sub(distance).map(|x| Coord::new(x, at.y)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter(|&position| {
                self.cell(position)
                    .is_some_and(|cell| !cell.visited && cell.cell_type.is_open())
            })
            .collect()
    }

    /// Open the wall cell lying between two lattice cells and mark it visited
    ///
    /// Returns the opened position, or `None` if it falls outside the grid.
    pub fn open_between(&mut self, from: Coord, to: Coord) -> Option<Coord> {
        let wall = from.midpoint(to);
        let cell = self.cell_mut(wall)?;
        cell.cell_type = CellType::Passage;
        cell.visited = true;
        Some(wall)
    }

    /// First unvisited passage in row-major order
    pub fn first_unvisited_passage(&self) -> Option<Coord> {
        self.cells
            .iter()
            .find(|cell| !cell.visited && cell.cell_type == CellType::Passage)
            .map(Cell::position)
    }
}
