//! Per-item download execution.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::fs::DestinationPlan;
use crate::media::MediaItem;
use crate::output::{outcome_notification, Notification, NotificationSink};
use crate::ytdlp::{classify, DownloadOutcome, YtDlp};

/// Runs one item's download attempt.
#[async_trait]
pub trait ItemDownloader: Send + Sync {
    /// Attempt to download `item` into `plan`. `Err` means the attempt
    /// could not even start (no URL, unrunnable executable); a started
    /// attempt always classifies into an outcome.
    async fn download(&self, item: &MediaItem, plan: &DestinationPlan) -> Result<DownloadOutcome>;
}

/// [`ItemDownloader`] backed by the yt-dlp subprocess. Announces each
/// attempt and its outcome on the notification sink.
pub struct YtDlpDownloader<'a> {
    ytdlp: &'a YtDlp,
    sink: &'a dyn NotificationSink,
}

impl<'a> YtDlpDownloader<'a> {
    pub fn new(ytdlp: &'a YtDlp, sink: &'a dyn NotificationSink) -> Self {
        Self { ytdlp, sink }
    }
}

#[async_trait]
impl ItemDownloader for YtDlpDownloader<'_> {
    async fn download(&self, item: &MediaItem, plan: &DestinationPlan) -> Result<DownloadOutcome> {
        let label = item.display_label();

        let url = match &item.url {
            Some(url) => url,
            None => {
                let err = Error::MissingItemUrl(label.clone());
                self.sink
                    .notify(&Notification::warning("Skipping item", &err.to_string()))
                    .await;
                return Err(err);
            }
        };

        self.sink
            .notify(&Notification::info("Starting download", &label))
            .await;
        tracing::info!("Downloading {}", label);

        let (log, exit_code) = match self.ytdlp.download(url, &plan.output_template()).await {
            Ok(result) => result,
            Err(e) => {
                self.sink
                    .notify(&Notification::error(
                        "Download failed",
                        &format!("{label}\n\n{e}"),
                    ))
                    .await;
                return Err(e);
            }
        };

        // Success detail is the item's own title; the collection prefix
        // stays on the notification label only.
        let outcome = classify(&log, exit_code, &item.title);
        tracing::debug!("Outcome for {}: {:?}", label, outcome);
        self.sink.notify(&outcome_notification(&label, &outcome)).await;
        Ok(outcome)
    }
}
