//! Progress display for carving and step recording

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos} steps")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for the phases of a run
///
/// Each phase gets its own line; finished phases stay visible with their
/// completion message.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    current: Option<ProgressBar>,
    phases_started: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            current: None,
            phases_started: 0,
        }
    }

    /// Show a spinner while a maze of the given size is carved
    pub fn start_generation(&mut self, width: usize, height: usize) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_message(format!("Carving {width}x{height} maze"));
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.begin(spinner);
    }

    /// Show a step counter bounded by the worst-case step count
    ///
    /// Every open cell is entered once and left at most once, so a search
    /// never takes more than twice the number of open cells.
    pub fn start_solve(&mut self, label: &str, open_cells: usize) {
        let bar = ProgressBar::new((open_cells * 2) as u64);
        bar.set_style(STEP_STYLE.clone());
        bar.set_message(label.to_string());
        self.begin(bar);
    }

    /// Report the steps performed so far in the current phase
    pub fn update_step(&self, step: usize) {
        if let Some(ref bar) = self.current {
            bar.set_position(step as u64);
        }
    }

    /// Mark the current phase as completed
    pub fn finish_phase(&mut self, message: &str) {
        if let Some(bar) = self.current.take() {
            if let Some(length) = bar.length() {
                bar.set_length(bar.position().min(length));
            }
            bar.finish_with_message(format!("✓ {message}"));
        }
    }

    /// Number of phases started so far
    pub const fn phases_started(&self) -> usize {
        self.phases_started
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    fn begin(&mut self, bar: ProgressBar) {
        if let Some(previous) = self.current.take() {
            previous.finish();
        }
        self.current = Some(self.multi_progress.add(bar));
        self.phases_started += 1;
    }
}
