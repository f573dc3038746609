use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A loading spinner shown while a screen's requests are in flight.
///
/// Hidden outside interactive table mode so JSON output stays clean.
#[must_use]
pub fn spinner(message: &str) -> ProgressBar {
    if !crate::ui::prefs().progress {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(80));
    bar.set_message(message.to_string());
    bar
}
