//! Perfect maze generation by randomized backtracking, with an animated depth-first solver
//!
//! The generator carves a spanning tree into the odd-coordinate lattice of a
//! rectangular grid. The solver walks from the entrance to the exit with an
//! explicit stack, leaving a renderable trace of the route and of abandoned
//! dead ends after every step.

#![forbid(unsafe_code)]

/// Maze generation, solving and the shared random source
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid and cell data structures
pub mod spatial;

pub use algorithm::maze::Maze;
pub use algorithm::random::{RandomSource, SeededRandom, SequenceRandom};
pub use io::error::{MazeError, Result};
