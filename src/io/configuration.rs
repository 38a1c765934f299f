//! Maze constants and runtime configuration defaults

// Grid construction
/// Smallest accepted width or height of a grid
pub const MIN_DIMENSION: usize = 3;

// Size is chosen in notches, each notch adding ten cells to a side
/// Cells added per size notch (a side is `notches * CELLS_PER_NOTCH + 1` cells)
pub const CELLS_PER_NOTCH: usize = 10;
/// Default size in notches
pub const DEFAULT_NOTCHES: usize = 1;
/// Smallest accepted size in notches
pub const MIN_NOTCHES: usize = 1;
/// Largest size in notches in normal mode
pub const MAX_NOTCHES: usize = 100;
/// Largest size in notches with the extreme flag
pub const MAX_EXTREME_NOTCHES: usize = 800;

// Animation pacing
/// Delay between steps at speed 1, divided by the chosen speed
pub const BASE_STEP_DELAY_MS: u32 = 250;
/// Slowest animation speed
pub const MIN_SPEED: u32 = 1;
/// Fastest animation speed
pub const MAX_SPEED: u32 = 250;
/// Default animation speed
pub const DEFAULT_SPEED: u32 = 25;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames written to a step animation
pub const MAX_GIF_FRAMES: usize = 2_000;
/// The last animation frame is shown this many times longer than the others
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 25;

// Output settings
/// Default pixels per cell in exported images
pub const DEFAULT_PIXELS_PER_CELL: u32 = 4;
/// Largest accepted pixels per cell
pub const MAX_PIXELS_PER_CELL: u32 = 32;
/// Default output file for the unsolved maze
pub const DEFAULT_OUTPUT: &str = "maze.png";
/// Suffix added to the output stem for the solved image
pub const SOLVED_SUFFIX: &str = "_solved";
/// Suffix added to the output stem for the step animation
pub const STEPS_SUFFIX: &str = "_steps";

// Default palette
/// Colour of wall cells
pub const WALL_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Colour of open corridor cells
pub const PASSAGE_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Colour of cells on the solver's route
pub const PATH_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Colour of cells the solver abandoned
pub const BACKTRACKED_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Colour of the solver's current cell
pub const CURSOR_COLOR: [u8; 4] = [255, 0, 255, 255];

/// Side length in cells for a size given in notches
pub const fn side_for_notches(notches: usize) -> usize {
    notches * CELLS_PER_NOTCH + 1
}

/// Frame delay for an animation speed, never below one millisecond
pub const fn step_delay_ms(speed: u32) -> u32 {
    let speed = if speed == 0 { 1 } else { speed };
    let delay = BASE_STEP_DELAY_MS / speed;
    if delay == 0 { 1 } else { delay }
}
