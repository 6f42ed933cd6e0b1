//! Filesystem module.
//!
//! Provides:
//! - Collection folder naming
//! - Destination planning for downloads

pub mod naming;
pub mod paths;

pub use naming::{sanitize_folder_name, FALLBACK_FOLDER_NAME};
pub use paths::{
    ensure_dir, plan_destination, DestinationPlan, DEFAULT_PLAYLIST_TEMPLATE,
    DEFAULT_SINGLE_TEMPLATE,
};
