//! Download module.
//!
//! This module provides:
//! - Per-item download execution
//! - Sequential batch aggregation

pub mod batch;
pub mod executor;

pub use batch::{run_batch, run_single, BatchResult};
pub use executor::{ItemDownloader, YtDlpDownloader};
