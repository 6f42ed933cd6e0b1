//! Sources for the URL to download.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::media::is_http_url;
use crate::tools;

/// Chromium-family browsers that expose the active tab the same way.
const CHROMIUM_BROWSERS: &[&str] = &["Google Chrome", "Brave Browser", "Microsoft Edge", "Arc"];

/// Provides the URL a run should operate on.
#[async_trait]
pub trait ActiveTabProvider: Send + Sync {
    /// URL of the active browser tab, or `None` when no supported browser
    /// is frontmost or its tab is empty.
    async fn active_url(&self) -> Option<String>;
}

/// Fixed URL handed in explicitly, bypassing browser inspection.
pub struct ExplicitUrl(pub String);

#[async_trait]
impl ActiveTabProvider for ExplicitUrl {
    async fn active_url(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads the frontmost browser tab through AppleScript.
///
/// Carries the resolved `osascript` path; on hosts without it every query
/// answers `None`.
pub struct FrontmostBrowser {
    osascript: Option<PathBuf>,
}

impl FrontmostBrowser {
    pub fn new() -> Self {
        Self {
            osascript: tools::resolve("osascript"),
        }
    }
}

impl Default for FrontmostBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActiveTabProvider for FrontmostBrowser {
    async fn active_url(&self) -> Option<String> {
        let osascript = match &self.osascript {
            Some(path) => path,
            None => {
                tracing::debug!("osascript not available, no tab URL");
                return None;
            }
        };

        let output = Command::new(osascript)
            .arg("-e")
            .arg(frontmost_tab_script())
            .stdin(Stdio::null())
            .output()
            .await
            .ok()?;

        if !output.status.success() {
            tracing::debug!(
                "osascript failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        let raw = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if is_http_url(&raw) {
            Some(raw)
        } else {
            None
        }
    }
}

/// AppleScript that answers the active tab URL of the frontmost supported
/// browser, or an empty string.
fn frontmost_tab_script() -> String {
    let mut script = String::from(
        "tell application \"System Events\" to set frontApp to name of first application process whose frontmost is true\n",
    );
    script.push_str("if frontApp is \"Safari\" then\n");
    script.push_str("tell application \"Safari\" to return URL of current tab of front window\n");
    for browser in CHROMIUM_BROWSERS {
        script.push_str(&format!("else if frontApp is \"{browser}\" then\n"));
        script.push_str(&format!(
            "tell application \"{browser}\" to return URL of active tab of front window\n"
        ));
    }
    script.push_str("end if\nreturn \"\"\n");
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_explicit_url_is_returned() {
        let provider = ExplicitUrl("https://example.com/v/1".to_string());
        assert_eq!(
            provider.active_url().await.as_deref(),
            Some("https://example.com/v/1")
        );
    }

    #[tokio::test]
    async fn test_frontmost_without_osascript_is_none() {
        let provider = FrontmostBrowser { osascript: None };
        assert_eq!(provider.active_url().await, None);
    }

    #[test]
    fn test_script_covers_all_browsers() {
        let script = frontmost_tab_script();
        assert!(script.contains("\"Safari\""));
        for browser in CHROMIUM_BROWSERS {
            assert!(script.contains(&format!("\"{browser}\"")), "{browser} missing");
        }
    }

    #[test]
    fn test_non_http_tab_is_rejected() {
        assert!(!is_http_url("chrome://settings"));
        assert!(!is_http_url("missing value"));
        assert!(!is_http_url(""));
        assert!(is_http_url("https://www.youtube.com/watch?v=abc"));
    }
}
