//! Formatting utilities for terminal output

use crate::core::Feedback;
use indicatif::{ProgressBar, ProgressStyle};

/// Format feedback as key pegs: `●` exact, `○` color only, `·` no match
#[must_use]
pub fn feedback_pegs(feedback: Feedback, pegs: usize) -> String {
    let exact = usize::from(feedback.exact());
    let color_only = usize::from(feedback.color_only());
    let blank = pegs.saturating_sub(exact + color_only);

    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(color_only),
        "·".repeat(blank)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one row of a guess distribution
///
/// Any non-zero count gets at least one block.
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let bar = create_progress_bar(count as f64, max_count as f64, width);
    if count > 0 && !bar.starts_with('█') {
        let mut marked = String::from("█");
        marked.extend(bar.chars().skip(1));
        return marked;
    }
    bar
}

/// Progress bar for long-running commands, hidden when `visible` is false
#[must_use]
pub fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▓▒░");

    let bar = ProgressBar::new(len);
    bar.set_style(style);
    bar
}
