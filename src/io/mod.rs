/// Command-line interface and the run driver
pub mod cli;
/// Size, speed and colour constants
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Rendering of grids to images and PNG export
pub mod image;
/// Progress display for long runs
pub mod progress;
/// Solve recording and GIF export
pub mod visualization;
