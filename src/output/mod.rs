//! Output module for notifications, console output and progress.
//!
//! Provides:
//! - Notification model and sink trait
//! - Colored console output
//! - Desktop notifications and alerts
//! - Progress bars

pub mod console;
pub mod desktop;
pub mod progress;

use async_trait::async_trait;

use crate::ytdlp::DownloadOutcome;

pub use console::{print_error, print_info, print_success, print_warning, ConsoleSink};
pub use desktop::DesktopSink;
pub use progress::{item_bar, metadata_spinner};

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// One user-facing message. Delivery is fire-and-forget; sinks never
/// report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(severity: Severity, title: &str, body: &str) -> Self {
        Self {
            severity,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    pub fn info(title: &str, body: &str) -> Self {
        Self::new(Severity::Info, title, body)
    }

    pub fn success(title: &str, body: &str) -> Self {
        Self::new(Severity::Success, title, body)
    }

    pub fn warning(title: &str, body: &str) -> Self {
        Self::new(Severity::Warning, title, body)
    }

    pub fn error(title: &str, body: &str) -> Self {
        Self::new(Severity::Error, title, body)
    }
}

/// Receives user-facing notifications.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, notification: &Notification);
}

/// Fans one notification out to several sinks in order.
pub struct Broadcast {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl Broadcast {
    pub fn new(sinks: Vec<Box<dyn NotificationSink>>) -> Self {
        Self { sinks }
    }
}

#[async_trait]
impl NotificationSink for Broadcast {
    async fn notify(&self, notification: &Notification) {
        for sink in &self.sinks {
            sink.notify(notification).await;
        }
    }
}

/// Map a download outcome to the notification reporting it.
///
/// Unsupported URLs are informational, not errors; failures carry the
/// full downloader log for diagnosis.
pub fn outcome_notification(label: &str, outcome: &DownloadOutcome) -> Notification {
    match outcome {
        DownloadOutcome::Success { title } => Notification::success("Download complete", title),
        DownloadOutcome::AlreadyDownloaded { file } => {
            Notification::info("Already downloaded", file)
        }
        DownloadOutcome::Unsupported => Notification::info("Unsupported URL", label),
        DownloadOutcome::Failed { log } => {
            Notification::error("Download failed", &format!("{label}\n\n{log}"))
        }
    }
}
