//! Locating the external executables.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the downloader binary.
pub const YTDLP_BIN: &str = "yt-dlp";

/// Name of the transcoding helper binary.
pub const FFMPEG_BIN: &str = "ffmpeg";

/// Homebrew install locations probed when PATH lookup fails. Automation
/// contexts frequently run with a minimal PATH.
const PROBE_DIRS: &[&str] = &["/opt/homebrew/bin", "/usr/local/bin"];

/// Resolve an executable by name, accepting only absolute paths.
///
/// Checks PATH first, then probes the fixed install locations. One-shot,
/// no retries.
pub fn resolve(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        if path.is_absolute() {
            return Some(path);
        }
    }

    probe_dirs(name, PROBE_DIRS)
}

fn probe_dirs<P: AsRef<Path>>(name: &str, dirs: &[P]) -> Option<PathBuf> {
    let search_path = std::env::join_paths(dirs.iter().map(|d| d.as_ref())).ok()?;
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    which::which_in(name, Some(search_path), cwd).ok()
}

/// Paths of the external tools for one run.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// The downloader. Required.
    pub ytdlp: PathBuf,

    /// Transcoding helper handed to the downloader when present.
    pub ffmpeg: Option<PathBuf>,
}

impl Toolchain {
    /// Locate the downloader and the transcoding helper.
    ///
    /// The downloader is required; a missing helper is logged and the run
    /// proceeds without it.
    pub fn locate() -> Result<Self> {
        let ytdlp =
            resolve(YTDLP_BIN).ok_or_else(|| Error::ExecutableNotFound(YTDLP_BIN.to_string()))?;
        tracing::debug!("Using {} at {}", YTDLP_BIN, ytdlp.display());

        let ffmpeg = resolve(FFMPEG_BIN);
        match &ffmpeg {
            Some(path) => tracing::debug!("Using {} at {}", FFMPEG_BIN, path.display()),
            None => tracing::warn!("{} not found, merges run without it", FFMPEG_BIN),
        }

        Ok(Self { ytdlp, ffmpeg })
    }
}
