//! Spatial data structures shared by generation and solving
//!
//! This module contains:
//! - Cell states and coordinates
//! - The maze grid with its lifecycle phase

/// Cell states and coordinates
pub mod cell;
/// Maze grid and its lifecycle phase
pub mod grid;

pub use cell::{Cell, CellType, Coord};
pub use grid::{Grid, Phase};
