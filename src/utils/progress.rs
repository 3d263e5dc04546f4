//! Progress bar for batch operations

use indicatif::{ProgressBar, ProgressStyle};

/// Progress over a known number of items
///
/// The description is shown as a fixed prefix and the message slot names
/// the item being processed. Nothing is drawn for an empty batch.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    pub fn new(total: u64, description: &str) -> Self {
        let bar = if total == 0 { ProgressBar::hidden() } else { ProgressBar::new(total) };
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_prefix(description.to_string());

        ProgressTracker { bar }
    }

    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    /// Name the item currently being processed
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
