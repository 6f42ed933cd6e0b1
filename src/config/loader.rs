//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fs::paths::{DEFAULT_PLAYLIST_TEMPLATE, DEFAULT_SINGLE_TEMPLATE};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub downloader: DownloaderConfig,
}

/// Output location and naming configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base directory for downloads. Defaults to the user's Downloads
    /// folder.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Filename template for standalone videos.
    #[serde(default = "default_single_template")]
    pub single_template: String,

    /// Filename template for collection entries.
    #[serde(default = "default_playlist_template")]
    pub playlist_template: String,
}

/// Options passed through to the downloader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloaderConfig {
    /// Download-archive file the downloader records finished IDs in.
    #[serde(default)]
    pub archive: Option<PathBuf>,

    /// Browser whose cookies the downloader should use.
    #[serde(default)]
    pub cookies_from_browser: Option<String>,
}

fn default_single_template() -> String {
    DEFAULT_SINGLE_TEMPLATE.to_string()
}

fn default_playlist_template() -> String {
    DEFAULT_PLAYLIST_TEMPLATE.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            single_template: default_single_template(),
            playlist_template: default_playlist_template(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file at `path` when given, else the default location when
    /// one exists there, else built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Default configuration file location.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tabgrab").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.output
            .directory
            .clone()
            .unwrap_or_else(default_download_dir)
    }
}

fn default_download_dir() -> PathBuf {
    if let Some(dirs) = UserDirs::new() {
        if let Some(downloads) = dirs.download_dir() {
            return downloads.to_path_buf();
        }
        return dirs.home_dir().join("Downloads");
    }
    PathBuf::from(".")
}
