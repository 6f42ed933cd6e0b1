//! Desktop notifications through AppleScript.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::output::{Notification, NotificationSink, Severity};
use crate::tools;

/// Notification sink backed by `osascript`.
///
/// Error severity raises a blocking alert dialog; everything else posts a
/// notification banner. Hosts without `osascript` skip delivery.
pub struct DesktopSink {
    osascript: Option<PathBuf>,
}

impl DesktopSink {
    pub fn new() -> Self {
        Self {
            osascript: tools::resolve("osascript"),
        }
    }
}

impl Default for DesktopSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for DesktopSink {
    async fn notify(&self, notification: &Notification) {
        let osascript = match &self.osascript {
            Some(path) => path,
            None => return,
        };

        let script = match notification.severity {
            Severity::Error => alert_script(notification),
            _ => banner_script(notification),
        };

        // Fire and forget; failed delivery only gets a debug line.
        match Command::new(osascript)
            .arg("-e")
            .arg(&script)
            .stdin(Stdio::null())
            .output()
            .await
        {
            Ok(output) if !output.status.success() => {
                tracing::debug!(
                    "osascript notification failed: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            Err(e) => tracing::debug!("osascript not runnable: {}", e),
            _ => {}
        }
    }
}

fn banner_script(notification: &Notification) -> String {
    format!(
        "display notification \"{}\" with title \"{}\"",
        applescript_quote(&notification.body),
        applescript_quote(&notification.title),
    )
}

fn alert_script(notification: &Notification) -> String {
    format!(
        "display alert \"{}\" message \"{}\" as critical",
        applescript_quote(&notification.title),
        applescript_quote(&notification.body),
    )
}

/// Escape text for embedding in a double-quoted AppleScript literal.
fn applescript_quote(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
