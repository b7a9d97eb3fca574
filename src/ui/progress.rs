use indicatif::{ProgressBar, ProgressStyle};

/// A line counter for batch translation, drawn on stderr.
#[allow(clippy::unwrap_used)]
pub fn line_progress(total: usize) -> ProgressBar {
    let progress_bar = ProgressBar::new(total as u64);
    // unwrap is safe: template string is a compile-time constant
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("  Translating line {pos}/{len} {bar:30.cyan/blue}")
            .unwrap()
            .progress_chars("=> "),
    );
    progress_bar
}
