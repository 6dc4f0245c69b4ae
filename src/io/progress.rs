//! Terminal progress reporting for a generation run

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar tracking committed cells out of the grid total
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a bar spanning `total_cells`
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        Self { bar }
    }

    /// Report the current number of committed cells
    pub fn set_fixed(&self, fixed_cells: usize) {
        self.bar.set_position(fixed_cells as u64);
    }

    /// Close out the bar, naming the terminal state of the run
    pub fn finish(&self, solved: bool) {
        if solved {
            self.bar.finish_with_message("solved");
        } else {
            self.bar.abandon_with_message("stalled on contradiction");
        }
    }
}
