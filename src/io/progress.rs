//! Batch progress display for multi-icon runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Icons: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many icons of a batch have been written
///
/// Single-icon runs never draw a bar.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    total: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            total: 0,
            completed: 0,
        }
    }

    /// Prepare for `total` icons, drawing a bar when there is more than one
    pub fn initialize(&mut self, total: usize) {
        self.total = total;
        self.completed = 0;
        if total > 1 {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Show which seed is being rendered
    pub fn start_icon(&self, seed: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(seed.to_string());
        }
    }

    /// Count one icon as finished, written or skipped
    pub fn complete_icon(&mut self) {
        self.completed = (self.completed + 1).min(self.total);
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Icons finished so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Icons in the batch
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether a progress bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All icons written");
        }
    }
}
