//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for batch input processing
///
/// Silent when quiet mode is on or the batch has fewer than two inputs.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Start reporting over `total` inputs
    pub fn start(total: usize, quiet: bool) -> Self {
        if quiet || total < 2 {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} inputs {msg}")
        {
            bar.set_style(style.progress_chars("##-"));
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Record a completed input
    pub fn item_done(&self, source: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("done: {source}"));
            bar.inc(1);
        }
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
