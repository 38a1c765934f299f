//! Maze aggregate owning the grid, the random source and the two openings

use log::{info, warn};

use crate::algorithm::generator::{CarveSummary, carve};
use crate::algorithm::random::{RandomSource, SeededRandom};
use crate::algorithm::solver::{SolveSteps, Solver};
use crate::io::error::{MazeError, Result};
use crate::spatial::{Coord, Grid, Phase};

/// A maze together with the randomness used to carve and solve it
///
/// The random source is shared by generation and every solve, so a seeded
/// source reproduces both the layout and the solver's exploration.
#[derive(Debug, Clone)]
pub struct Maze<R = SeededRandom> {
    grid: Grid,
    random: R,
    start: Coord,
    exit: Coord,
}

impl<R: RandomSource> Maze<R> {
    /// Create an uncarved maze of the given size
    ///
    /// Odd dimensions are expected; with an even side the exit opening does
    /// not line up with the lattice and solving reports an unsolvable maze.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimension`] if width or height is below 3
    pub fn new(width: usize, height: usize, random: R) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        if width % 2 == 0 || height % 2 == 0 {
            warn!("Maze dimensions {width}x{height} are not both odd");
        }
        Ok(Self::assemble(grid, random))
    }

    /// Wrap a grid built by other means
    ///
    /// An [`Phase::Unbuilt`] grid is treated as already carved: it is solved
    /// as-is and cannot be passed to [`Maze::generate`].
    pub fn from_grid(mut grid: Grid, random: R) -> Self {
        if grid.phase() == Phase::Unbuilt {
            grid.set_phase(Phase::Carved);
        }
        Self::assemble(grid, random)
    }

    fn assemble(grid: Grid, random: R) -> Self {
        let start = grid.entrance();
        let exit = grid.exit();
        Self {
            grid,
            random,
            start,
            exit,
        }
    }

    /// Carve the maze
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::AlreadyGenerated`] unless the grid is still unbuilt
    pub fn generate(&mut self) -> Result<CarveSummary> {
        if self.grid.phase() != Phase::Unbuilt {
            return Err(MazeError::AlreadyGenerated);
        }

        let summary = carve(&mut self.grid, &mut self.random);
        info!(
            "Generated {}x{} maze ({} corridors opened)",
            self.grid.width(),
            self.grid.height(),
            summary.opened_walls
        );
        Ok(summary)
    }

    /// Solve the maze in one go, returning the annotated grid
    ///
    /// Any markings from an earlier solve are cleared first.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NotGenerated`] before the maze is carved, and
    /// [`MazeError::UnsolvableMaze`] if the exit cannot be reached
    pub fn solve(&mut self) -> Result<&Grid> {
        let steps = self.solver()?.run()?;
        info!("Solved maze from {} to {} in {steps} steps", self.start, self.exit);
        Ok(&self.grid)
    }

    /// Solve the maze lazily, one snapshot per transition
    ///
    /// # Errors
    ///
    /// Same as [`Maze::solver`]
    pub fn solve_steps(&mut self) -> Result<SolveSteps<'_, R>> {
        Ok(self.solver()?.into_steps())
    }

    /// Fresh search state for step-by-step driving
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NotGenerated`] before the maze is carved, and
    /// [`MazeError::UnsolvableMaze`] if the entrance is walled
    pub fn solver(&mut self) -> Result<Solver<'_, R>> {
        if self.grid.phase() == Phase::Unbuilt {
            return Err(MazeError::NotGenerated);
        }
        Solver::new(&mut self.grid, &mut self.random, self.start, self.exit)
    }

    /// Remove solver markings, restoring the unsolved look
    pub fn clear_solution(&mut self) {
        self.grid.reset_for_solve();
    }
}

impl<R> Maze<R> {
    /// Current grid state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Entrance cell in the left border
    pub const fn start(&self) -> Coord {
        self.start
    }

    /// Exit cell in the bottom border
    pub const fn exit(&self) -> Coord {
        self.exit
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Random source shared by generation and solving
    pub const fn random(&self) -> &R {
        &self.random
    }

    /// Take the grid out of the maze
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
