//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging

pub mod loader;

pub use loader::{Config, DownloaderConfig, OutputConfig};
