//! Batch aggregation over collection items.

use indicatif::ProgressBar;

use crate::download::executor::ItemDownloader;
use crate::fs::DestinationPlan;
use crate::media::MediaUnit;
use crate::output::{item_bar, Notification, NotificationSink};

/// Tally of a run. The only way to grow it is [`BatchResult::record`],
/// which keeps `success_count + failure_count` equal to the number of
/// attempts folded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub success_count: usize,
    pub failure_count: usize,
}

impl BatchResult {
    /// Fold one attempt into the tally.
    pub fn record(mut self, success: bool) -> Self {
        if success {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
        self
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }
}

/// Download every item of a collection, one at a time, in source order.
///
/// Skipped and failed items never stop the loop. Sends a start
/// notification before the first item and a summary after the last,
/// whatever the outcomes were.
pub async fn run_batch(
    unit: &MediaUnit,
    plan: &DestinationPlan,
    downloader: &dyn ItemDownloader,
    sink: &dyn NotificationSink,
    quiet: bool,
) -> BatchResult {
    tracing::info!(
        "Starting playlist download: {} ({} items)",
        unit.title,
        unit.items.len()
    );
    sink.notify(&Notification::info(
        "Starting playlist download",
        &format!("{} ({} items)", unit.title, unit.items.len()),
    ))
    .await;

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        item_bar(unit.items.len() as u64)
    };

    let mut result = BatchResult::default();
    for item in &unit.items {
        let attempt = downloader.download(item, plan).await;
        result = result.record(matches!(&attempt, Ok(outcome) if outcome.is_success()));
        bar.inc(1);
    }
    bar.finish_and_clear();

    tracing::info!(
        "Playlist download finished: {} ok, {} failed of {}",
        result.success_count,
        result.failure_count,
        result.total()
    );
    sink.notify(&Notification::info(
        "Playlist download finished",
        &format!(
            "{}: {} of {} downloaded, {} failed",
            unit.title,
            result.success_count,
            result.total(),
            result.failure_count
        ),
    ))
    .await;

    result
}

/// Download a standalone unit's one item.
pub async fn run_single(
    unit: &MediaUnit,
    plan: &DestinationPlan,
    downloader: &dyn ItemDownloader,
) -> BatchResult {
    let item = unit.as_single_item();
    let attempt = downloader.download(&item, plan).await;
    BatchResult::default().record(matches!(&attempt, Ok(outcome) if outcome.is_success()))
}
