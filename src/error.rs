//! Error types for the tabgrab application.

use thiserror::Error;

/// Main error type for the application.
///
/// Download results are not errors: a finished yt-dlp run is classified into
/// a [`crate::ytdlp::DownloadOutcome`] instead. This enum covers the
/// conditions that prevent an attempt from being made at all.
#[derive(Error, Debug)]
pub enum Error {
    /// The external downloader could not be located anywhere on the host.
    /// Fatal for yt-dlp; the optional ffmpeg helper never raises this.
    #[error("Executable not found: {0}. Install it or add it to your PATH.")]
    ExecutableNotFound(String),

    /// No supported browser is frontmost, or its active tab has no URL.
    #[error("No active browser tab URL available")]
    NoActiveTabUrl,

    /// A playlist entry came back from metadata without any usable URL.
    #[error("No URL for item '{0}'")]
    MissingItemUrl(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
