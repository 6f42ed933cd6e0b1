//! Console output utilities.

use async_trait::async_trait;
use console::style;

use crate::output::{Notification, NotificationSink, Severity};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Notification sink that styles messages onto the terminal.
pub struct ConsoleSink {
    quiet: bool,
}

impl ConsoleSink {
    /// `quiet` drops info and success chatter, keeping warnings and
    /// errors.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

#[async_trait]
impl NotificationSink for ConsoleSink {
    async fn notify(&self, notification: &Notification) {
        let line = if notification.body.is_empty() {
            notification.title.clone()
        } else {
            format!("{}: {}", notification.title, notification.body)
        };

        match notification.severity {
            Severity::Info if self.quiet => {}
            Severity::Success if self.quiet => {}
            Severity::Info => print_info(&line),
            Severity::Success => print_success(&line),
            Severity::Warning => print_warning(&line),
            Severity::Error => print_error(&line),
        }
    }
}
