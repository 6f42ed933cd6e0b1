//! Classification of downloader log output into outcomes.
//!
//! The downloader reports success, skips, and errors only through its log
//! text, so classification is a small table of regular expressions over
//! the combined output, gated on the exit code. Keeping the rules here
//! lets them evolve without touching the orchestration.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Result of one item's download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// A new file was produced. Carries the item title; the log is not
    /// mined for the destination filename.
    Success { title: String },

    /// The item was skipped because it is already on disk or recorded in
    /// the download archive.
    AlreadyDownloaded { file: String },

    /// The downloader has no extractor for this URL.
    Unsupported,

    /// The downloader failed. Carries the full log for diagnosis.
    Failed { log: String },
}

impl DownloadOutcome {
    /// Whether this outcome counts toward the batch success tally.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            DownloadOutcome::Success { .. } | DownloadOutcome::AlreadyDownloaded { .. }
        )
    }
}

/// Compiled log-matching rules.
struct Rules {
    already_downloaded: Regex,
    already_in_archive: Regex,
    unsupported_url: Regex,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| Rules {
        already_downloaded: Regex::new(
            r"(?m)^\[download\] (?P<file>.+) has already been downloaded",
        )
        .unwrap(),
        already_in_archive: Regex::new(
            r"(?m)^\[download\] (?P<file>.+?):? has already been recorded in (?:the )?archive",
        )
        .unwrap(),
        unsupported_url: Regex::new(r"(?i)unsupported url").unwrap(),
    })
}

/// Classify one download attempt from its log output and exit code.
///
/// `title` is echoed as the success detail. A missing exit code (killed
/// by signal) is a failure.
pub fn classify(output: &str, exit_code: Option<i32>, title: &str) -> DownloadOutcome {
    let rules = rules();

    if exit_code == Some(0) {
        if let Some(file) = capture_basename(&rules.already_downloaded, output) {
            return DownloadOutcome::AlreadyDownloaded { file };
        }
        if let Some(file) = capture_basename(&rules.already_in_archive, output) {
            return DownloadOutcome::AlreadyDownloaded { file };
        }
        return DownloadOutcome::Success {
            title: title.to_string(),
        };
    }

    if rules.unsupported_url.is_match(output) {
        return DownloadOutcome::Unsupported;
    }

    DownloadOutcome::Failed {
        log: output.to_string(),
    }
}

fn capture_basename(re: &Regex, output: &str) -> Option<String> {
    let name = re
        .captures(output)
        .and_then(|c| c.name("file"))
        .map(|m| m.as_str().trim().to_string())?;
    let basename = Path::new(&name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(name);
    Some(basename)
}
