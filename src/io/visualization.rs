//! Step capture and GIF generation for the solving animation

use std::path::Path;

use image::{Delay, Frame, RgbaImage};

use crate::algorithm::random::RandomSource;
use crate::algorithm::solver::{Solver, Transition};
use crate::io::configuration::{
    FINAL_FRAME_HOLD_FACTOR, MAX_GIF_FRAMES, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{MazeError, Result};
use crate::io::image::{Palette, render, scale_image};
use crate::spatial::{CellType, Coord, Grid};

/// A single solver transition as seen by the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    /// One-based transition index
    pub step: usize,
    /// Cell whose type changed
    pub marked: Coord,
    /// New type of the marked cell
    pub marked_as: CellType,
    /// Cell the search stands on afterwards
    pub cursor: Coord,
}

impl StepEvent {
    /// Build the event for a solver transition
    pub const fn from_transition(step: usize, transition: &Transition) -> Self {
        let (marked, marked_as) = transition.marked();
        Self {
            step,
            marked,
            marked_as,
            cursor: transition.cursor(),
        }
    }
}

/// Captures solver transitions for later rendering
///
/// Only the changed cell is stored per step; frames are rebuilt at export
/// time by replaying the events over the grid as it was before solving.
pub struct SolveRecording {
    base: Grid,
    start: Coord,
    events: Vec<StepEvent>,
    palette: Palette,
    scale: u32,
}

impl SolveRecording {
    /// Start an empty recording over a grid without solver markings
    pub fn new(base: Grid, start: Coord, palette: Palette, scale: u32) -> Self {
        Self {
            base,
            start,
            events: Vec::new(),
            palette,
            scale,
        }
    }

    /// Drive a solver to completion, recording every transition
    ///
    /// `on_step` is called after each transition with the step count.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::UnsolvableMaze`] if the solver cannot reach the exit
    pub fn capture<R: RandomSource>(
        mut solver: Solver<'_, R>,
        palette: Palette,
        scale: u32,
        mut on_step: impl FnMut(usize),
    ) -> Result<Self> {
        let mut recording = Self::new(solver.grid().clone(), solver.current(), palette, scale);

        while let Some(transition) = solver.step()? {
            recording.record(solver.steps(), &transition);
            on_step(solver.steps());
        }

        Ok(recording)
    }

    /// Record one transition
    pub fn record(&mut self, step: usize, transition: &Transition) {
        self.events.push(StepEvent::from_transition(step, transition));
    }

    /// Returns all recorded events
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// Returns the total number of recorded events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Export the recorded steps as an animated GIF
    ///
    /// Frames are skipped when the requested delay is faster than viewers
    /// can show, or when the step count exceeds [`MAX_GIF_FRAMES`], keeping
    /// the apparent animation speed. The last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No steps were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.events.is_empty() {
            return Err(MazeError::InvalidParameter {
                parameter: "recording",
                value: "empty".to_string(),
                reason: "No solver steps captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = self.skip_factor(frame_delay_ms);
        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Number of steps folded into each written frame
    pub fn skip_factor(&self, frame_delay_ms: u32) -> usize {
        let frame_delay_ms = frame_delay_ms.max(1);
        let speed_skip = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };
        let count_skip = self.events.len().div_ceil(MAX_GIF_FRAMES).max(1);

        speed_skip.max(count_skip)
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut grid = self.base.clone();
        let mut frames = Vec::new();

        frames.push(self.render_frame(&grid, self.start, delay_ms));

        let mut cursor = self.start;
        for (index, event) in self.events.iter().enumerate() {
            grid.set_cell_type(event.marked, event.marked_as);
            cursor = event.cursor;

            if (index + 1) % skip_factor == 0 {
                frames.push(self.render_frame(&grid, cursor, delay_ms));
            }
        }

        if self.events.len() % skip_factor != 0 {
            frames.push(self.render_frame(&grid, cursor, delay_ms));
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * FINAL_FRAME_HOLD_FACTOR, 1),
            ));
        }

        frames
    }

    fn render_frame(&self, grid: &Grid, cursor: Coord, delay_ms: u32) -> Frame {
        let img: RgbaImage = scale_image(&render(grid, Some(cursor), &self.palette), self.scale);
        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
