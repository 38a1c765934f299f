//! Error types for maze construction, solving and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Coord;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimensions too small to hold a single lattice cell
    InvalidDimension {
        /// Requested number of columns
        width: usize,
        /// Requested number of rows
        height: usize,
        /// Smallest accepted value for either dimension
        minimum: usize,
    },

    /// The solver exhausted its stack without reaching the exit
    ///
    /// Never happens on a grid carved by the generator. Occurs when a
    /// hand-built grid has no route between the two openings.
    UnsolvableMaze {
        /// Cell the search started from
        start: Coord,
        /// Cell the search was looking for
        exit: Coord,
        /// Transitions performed before giving up
        steps: usize,
    },

    /// Generation was requested on a grid that has already been carved
    AlreadyGenerated,

    /// Solving was requested before the maze was carved
    NotGenerated,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                width,
                height,
                minimum,
            } => {
                write!(
                    f,
                    "Invalid maze dimensions {width}x{height}: both sides must be at least {minimum}"
                )
            }
            Self::UnsolvableMaze { start, exit, steps } => {
                write!(
                    f,
                    "Maze is unsolvable: no route from {start} to {exit} after {steps} steps"
                )
            }
            Self::AlreadyGenerated => {
                write!(f, "Maze has already been generated")
            }
            Self::NotGenerated => {
                write!(f, "Maze must be generated before it can be solved")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
