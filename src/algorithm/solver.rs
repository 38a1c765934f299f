//! Iterative depth-first search from the entrance to the exit
//!
//! The search is an explicit state machine (current cell, stack, visited
//! flags) advanced one transition at a time. Cells on the candidate route are
//! marked [`CellType::Path`], abandoned cells [`CellType::Backtracked`], which
//! makes every intermediate state directly renderable.

use std::iter::FusedIterator;

use log::debug;

use crate::algorithm::random::RandomSource;
use crate::io::error::{MazeError, Result};
use crate::spatial::{CellType, Coord, Grid, Phase};

/// Distance between neighbouring cells during the search
pub const SOLVE_STRIDE: usize = 1;

/// One move of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `from` joined the route and the search moved on to `to`
    Advanced {
        /// Cell marked as part of the route
        from: Coord,
        /// Newly discovered cell
        to: Coord,
    },
    /// `from` was a dead end and the search returned to `to`
    Backtracked {
        /// Cell marked as abandoned
        from: Coord,
        /// Cell popped from the route
        to: Coord,
    },
}

impl Transition {
    /// Cell whose type changed during the move, and its new type
    pub const fn marked(&self) -> (Coord, CellType) {
        match *self {
            Self::Advanced { from, .. } => (from, CellType::Path),
            Self::Backtracked { from, .. } => (from, CellType::Backtracked),
        }
    }

    /// Cell the search stands on after the move
    pub const fn cursor(&self) -> Coord {
        match *self {
            Self::Advanced { to, .. } | Self::Backtracked { to, .. } => to,
        }
    }
}

/// Depth-first search state over a carved grid
///
/// Creating a solver resets all previous solver markings, so repeated solves
/// always start from a clean grid.
pub struct Solver<'a, R> {
    grid: &'a mut Grid,
    random: &'a mut R,
    stack: Vec<Coord>,
    start: Coord,
    current: Coord,
    exit: Coord,
    steps: usize,
}

impl<'a, R: RandomSource> Solver<'a, R> {
    /// Prepare a search from `start` to `exit`
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::UnsolvableMaze`] without touching the grid when
    /// `start` is a wall or lies outside the grid
    pub fn new(grid: &'a mut Grid, random: &'a mut R, start: Coord, exit: Coord) -> Result<Self> {
        if !grid.is_open(start) {
            return Err(MazeError::UnsolvableMaze {
                start,
                exit,
                steps: 0,
            });
        }

        grid.reset_for_solve();
        grid.mark_visited(start);
        grid.set_phase(if start == exit {
            Phase::Solved
        } else {
            Phase::Solving
        });

        Ok(Self {
            grid,
            random,
            stack: Vec::new(),
            start,
            current: start,
            exit,
            steps: 0,
        })
    }

    /// Grid in its current intermediate state
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Cell the search currently stands on
    pub const fn current(&self) -> Coord {
        self.current
    }

    /// Transitions performed so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Length of the current candidate route
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the exit has been reached
    pub fn is_finished(&self) -> bool {
        self.current == self.exit
    }

    /// Perform one transition
    ///
    /// Returns `Ok(None)` once the exit has been reached. A failed step leaves
    /// every cell untouched and moves the grid to [`Phase::Unsolvable`].
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::UnsolvableMaze`] when the route stack is empty and
    /// the current cell has no unvisited open neighbour.
    pub fn step(&mut self) -> Result<Option<Transition>> {
        if self.is_finished() {
            return Ok(None);
        }

        let from = self.current;
        let neighbors = self.grid.unvisited_neighbors(from, SOLVE_STRIDE);

        let transition = if let Some(&to) = self.random.choose(&neighbors) {
            self.grid.set_cell_type(from, CellType::Path);
            self.stack.push(from);
            self.grid.mark_visited(to);
            Transition::Advanced { from, to }
        } else if let Some(to) = self.stack.pop() {
            self.grid.set_cell_type(from, CellType::Backtracked);
            Transition::Backtracked { from, to }
        } else {
            self.grid.set_phase(Phase::Unsolvable);
            return Err(MazeError::UnsolvableMaze {
                start: self.start,
                exit: self.exit,
                steps: self.steps,
            });
        };

        self.current = transition.cursor();
        self.steps += 1;
        if self.is_finished() {
            self.grid.set_phase(Phase::Solved);
        }

        Ok(Some(transition))
    }

    /// Run the search to completion, returning the number of transitions
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::UnsolvableMaze`] if the exit cannot be reached.
    pub fn run(&mut self) -> Result<usize> {
        while self.step()?.is_some() {}

        debug!(
            "Reached {} from {} in {} steps (route length {})",
            self.exit,
            self.start,
            self.steps,
            self.stack.len()
        );
        Ok(self.steps)
    }

    /// Lazy, single-pass sequence of snapshots, one per transition
    pub fn into_steps(self) -> SolveSteps<'a, R> {
        SolveSteps {
            solver: self,
            done: false,
        }
    }
}

/// Snapshot of the search after one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveFrame {
    /// One-based index of the transition
    pub step: usize,
    /// Cell the search stands on
    pub cursor: Coord,
    /// Move that produced this frame
    pub transition: Transition,
    /// Grid state after the move
    pub grid: Grid,
}

/// Iterator yielding a [`SolveFrame`] per transition
///
/// Finite and not restartable. Dropping it part-way leaves the grid in the
/// state of the last yielded frame. After an error has been yielded the
/// iterator ends.
pub struct SolveSteps<'a, R> {
    solver: Solver<'a, R>,
    done: bool,
}

impl<R: RandomSource> SolveSteps<'_, R> {
    /// Underlying search state
    pub const fn solver(&self) -> &Solver<'_, R> {
        &self.solver
    }
}

impl<R: RandomSource> Iterator for SolveSteps<'_, R> {
    type Item = Result<SolveFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.solver.step() {
            Ok(Some(transition)) => {
                self.done = self.solver.is_finished();
                Some(Ok(SolveFrame {
                    step: self.solver.steps(),
                    cursor: self.solver.current(),
                    transition,
                    grid: self.solver.grid().clone(),
                }))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl<R: RandomSource> FusedIterator for SolveSteps<'_, R> {}
