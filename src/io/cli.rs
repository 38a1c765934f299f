//! Command-line interface for generating, solving and animating a maze

use crate::algorithm::maze::Maze;
use crate::algorithm::random::SeededRandom;
use crate::io::configuration::{
    DEFAULT_NOTCHES, DEFAULT_OUTPUT, DEFAULT_PIXELS_PER_CELL, DEFAULT_SPEED, MAX_EXTREME_NOTCHES,
    MAX_NOTCHES, MAX_PIXELS_PER_CELL, MAX_SPEED, MIN_NOTCHES, MIN_SPEED, SOLVED_SUFFIX,
    STEPS_SUFFIX, side_for_notches, step_delay_ms,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Palette, export_png, render, render_unsolved, scale_image};
use crate::io::progress::ProgressManager;
use crate::io::visualization::SolveRecording;
use crate::spatial::{CellType, Phase};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazegen")]
#[command(
    author,
    version,
    about = "Generate a perfect maze and show how depth-first search solves it"
)]
/// Command-line arguments for the maze tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Width in notches; the maze is notches*10+1 cells wide
    #[arg(short = 'x', long, default_value_t = DEFAULT_NOTCHES)]
    pub columns: usize,

    /// Height in notches; the maze is notches*10+1 cells tall
    #[arg(short = 'y', long, default_value_t = DEFAULT_NOTCHES)]
    pub rows: usize,

    /// Random seed for reproducible mazes (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// PNG file receiving the unsolved maze
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write the solved maze next to the output
    ///
    /// With --steps the image shows the same route and dead ends as the animation
    #[arg(long)]
    pub solve: bool,

    /// Also write the step-by-step solving animation as a GIF
    #[arg(long)]
    pub steps: bool,

    /// Animation speed, frame delay is 250 ms divided by this value
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Pixels per cell in the written images
    #[arg(short, long, default_value_t = DEFAULT_PIXELS_PER_CELL)]
    pub pixels: u32,

    /// Allow sizes up to 800 notches instead of 100
    #[arg(short, long)]
    pub extreme: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate even if the output file exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Largest accepted size in notches for the current mode
    pub const fn max_notches(&self) -> usize {
        if self.extreme {
            MAX_EXTREME_NOTCHES
        } else {
            MAX_NOTCHES
        }
    }

    /// Maze width in cells
    pub const fn maze_width(&self) -> usize {
        side_for_notches(self.columns)
    }

    /// Maze height in cells
    pub const fn maze_height(&self) -> usize {
        side_for_notches(self.rows)
    }

    /// Delay between animation frames in milliseconds
    pub const fn frame_delay_ms(&self) -> u32 {
        step_delay_ms(self.speed)
    }

    /// Check all arguments against their accepted ranges
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidParameter`] naming the first
    /// argument out of range
    pub fn validate(&self) -> Result<()> {
        let max_notches = self.max_notches();
        for (parameter, value) in [("columns", self.columns), ("rows", self.rows)] {
            if !(MIN_NOTCHES..=max_notches).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between {MIN_NOTCHES} and {max_notches}"),
                ));
            }
        }

        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(invalid_parameter(
                "speed",
                &self.speed,
                &format!("must be between {MIN_SPEED} and {MAX_SPEED}"),
            ));
        }

        if !(1..=MAX_PIXELS_PER_CELL).contains(&self.pixels) {
            return Err(invalid_parameter(
                "pixels",
                &self.pixels,
                &format!("must be between 1 and {MAX_PIXELS_PER_CELL}"),
            ));
        }

        if self.output.extension().and_then(|s| s.to_str()) != Some("png") {
            return Err(invalid_parameter(
                "output",
                &self.output.display(),
                &"must be a .png file",
            ));
        }

        Ok(())
    }
}

/// Runs one generate / solve / animate cycle with progress tracking
pub struct MazeProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the maze and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, solving or any export fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;

        if !self.should_process() {
            return Ok(());
        }

        let random = self
            .cli
            .seed
            .map_or_else(SeededRandom::from_entropy, SeededRandom::new);
        info!("Using seed {}", random.seed());

        let mut maze = Maze::new(self.cli.maze_width(), self.cli.maze_height(), random)?;
        let palette = Palette::default();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_generation(maze.width(), maze.height());
        }
        let summary = maze.generate()?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_phase(&format!(
                "Carved {}x{} maze ({} corridors)",
                maze.width(),
                maze.height(),
                summary.opened_walls
            ));
        }

        export_png(
            &scale_image(&render_unsolved(maze.grid(), &palette), self.cli.pixels),
            &self.cli.output,
        )?;

        if self.cli.steps {
            self.write_animation(&mut maze, palette)?;
        }

        if self.cli.solve {
            let exit = maze.exit();
            // The recorded solve already left the maze solved
            let solved = if maze.grid().phase() == Phase::Solved {
                maze.grid()
            } else {
                maze.solve()?
            };
            export_png(
                &scale_image(&render(solved, Some(exit), &palette), self.cli.pixels),
                &Self::get_solved_path(&self.cli.output),
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn write_animation(&mut self, maze: &mut Maze, palette: Palette) -> Result<()> {
        let open_cells = maze.grid().cells().filter(|c| c.cell_type != CellType::Wall).count();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_solve("Recording solve", open_cells);
        }

        let progress = self.progress_manager.as_ref();
        let recording = SolveRecording::capture(maze.solver()?, palette, self.cli.pixels, |step| {
            if let Some(pm) = progress {
                pm.update_step(step);
            }
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_phase(&format!("Recorded {} steps", recording.event_count()));
        }

        recording.export_gif(&Self::get_steps_path(&self.cli.output), self.cli.frame_delay_ms())
    }

    fn should_process(&self) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if self.cli.output.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", self.cli.output.display());
            }
            false
        } else {
            true
        }
    }

    /// Path of the solved image derived from the output path
    pub fn get_solved_path(output_path: &Path) -> PathBuf {
        Self::sibling_path(output_path, SOLVED_SUFFIX, "png")
    }

    /// Path of the step animation derived from the output path
    pub fn get_steps_path(output_path: &Path) -> PathBuf {
        Self::sibling_path(output_path, STEPS_SUFFIX, "gif")
    }

    fn sibling_path(output_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = output_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = output_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
