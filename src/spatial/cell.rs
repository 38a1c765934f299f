//! Cell states and grid coordinates shared by the generator and the solver

use std::fmt;

/// Column/row position inside a grid
///
/// `x` grows to the right (columns), `y` grows downwards (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Coord {
    /// Create a coordinate from a column and a row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Position halfway between two cells lying on the same row or column
    ///
    /// Used to find the wall separating two lattice cells two steps apart.
    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            x: self.x.midpoint(other.x),
            y: self.y.midpoint(other.y),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Visual and structural state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    /// Permanently impassable
    #[default]
    Wall,
    /// Open corridor, not part of the current search trace
    Passage,
    /// On the solver's current candidate route
    Path,
    /// Explored by the solver and abandoned as a dead end
    Backtracked,
}

impl CellType {
    /// Whether the cell can be walked through
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// One addressable grid position
///
/// The coordinates are fixed at creation; the type and the `visited` scratch
/// flag are overwritten by every generation and solve pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Coord,
    /// Current state of the cell
    pub cell_type: CellType,
    /// Scratch flag reused by generation and solving
    pub visited: bool,
}

impl Cell {
    /// Create an unvisited cell
    pub const fn new(position: Coord, cell_type: CellType) -> Self {
        Self {
            position,
            cell_type,
            visited: false,
        }
    }

    /// Position of the cell in its grid
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// Column index
    pub const fn x(&self) -> usize {
        self.position.x
    }

    /// Row index
    pub const fn y(&self) -> usize {
        self.position.y
    }

    /// Whether the cell is a wall
    pub const fn is_wall(&self) -> bool {
        !self.cell_type.is_open()
    }
}
