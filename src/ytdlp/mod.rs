//! yt-dlp integration module.
//!
//! Provides:
//! - Subprocess invocation for metadata and downloads
//! - Log output classification

pub mod client;
pub mod outcome;

pub use client::{YtDlp, FORMAT_SELECTOR, FORMAT_SORT, MERGE_POSTPROCESSOR_ARGS};
pub use outcome::{classify, DownloadOutcome};
