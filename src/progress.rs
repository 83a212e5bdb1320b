use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str =
    "{spinner:.green} Fetching [{bar:40.cyan/blue}] {pos}/{len} repositories ({percent}%)";

/// Progress bar for per-repository language fetches.
///
/// Hidden in quiet mode or when stderr is not a TTY, so piped output
/// stays clean. `indicatif::ProgressBar` counts atomically, which lets
/// rayon workers tick a shared handle directly.
#[derive(Clone)]
pub struct FetchProgress {
    bar: ProgressBar,
}

impl FetchProgress {
    /// Creates a progress bar over `total` repositories, written to
    /// stderr so it never mixes with stdout output.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet || !std::io::stderr().is_terminal() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
                bar.set_style(style.progress_chars("█▓░"));
            }
            bar
        };
        Self { bar }
    }

    /// Records one completed repository.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finishes the bar and clears it from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
