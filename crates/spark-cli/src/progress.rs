//! Stderr spinner for commands that wait on GitHub.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

const TICK: Duration = Duration::from_millis(100);

/// Spinner around one network call. Hidden when progress output is off.
pub struct Progress(Option<ProgressBar>);

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        let bar = ui::prefs().progress.then(|| {
            let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            let bar = ProgressBar::new_spinner()
                .with_style(style)
                .with_message(message.to_string());
            bar.enable_steady_tick(TICK);
            bar
        });
        Self(bar)
    }

    /// Remove the spinner line.
    pub fn finish_clear(self) {
        if let Some(bar) = self.0 {
            bar.finish_and_clear();
        }
    }

    /// Leave `message` where the spinner was.
    pub fn finish_err(self, message: &str) {
        if let Some(bar) = self.0 {
            bar.abandon_with_message(message.to_string());
        }
    }
}
