//! Progress display for metadata lookups and batch runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the metadata dump is fetched.
pub fn metadata_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Bar counting collection items as their download attempts finish.
pub fn item_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:30.green/dim}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    bar.set_message("Downloading");
    bar
}
