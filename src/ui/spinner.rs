use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(80);

/// Shown on stderr while a translation or detection request is awaited,
/// e.g. "Translating to Pidgin..." or "Detecting language...".
///
/// Hidden automatically when stderr is not a terminal, so piped runs and
/// tests see only the shell's own output. Clears itself when dropped.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(FRAMES);

        let progress_bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(message.to_string());
        progress_bar.enable_steady_tick(TICK);

        Self { progress_bar }
    }

    /// Clears the spinner before the result is printed.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
