//! tabgrab - download the video in the frontmost browser tab.
//!
//! This library wraps yt-dlp for one-shot, automation-friendly downloads.
//!
//! # Features
//!
//! - Reads the URL from the frontmost browser tab via AppleScript
//! - Resolves single videos and playlists through a flat metadata dump
//! - Downloads playlists item by item into their own folder
//! - Classifies downloader log output into success, skip and failure
//! - Reports everything through notifications instead of exit codes
//!
//! # Example
//!
//! ```no_run
//! use tabgrab::config::Config;
//! use tabgrab::fs::plan_destination;
//! use tabgrab::media::MetadataResult;
//! use tabgrab::tools::Toolchain;
//! use tabgrab::ytdlp::YtDlp;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default(None)?;
//!     let tools = Toolchain::locate()?;
//!     let ytdlp = YtDlp::new(tools.ytdlp, tools.ffmpeg, None, None);
//!
//!     let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
//!     if let MetadataResult::Resolved(unit) = ytdlp.fetch_metadata(url).await {
//!         let plan = plan_destination(&config, &unit);
//!         println!("{} -> {}", unit.title, plan.output_template());
//!     }
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod tools;
pub mod ytdlp;

// Re-exports for convenience
pub use config::Config;
pub use download::{run_batch, run_single, BatchResult};
pub use error::{Error, Result};
pub use media::{MediaItem, MediaUnit, MetadataResult};
pub use ytdlp::{DownloadOutcome, YtDlp};
