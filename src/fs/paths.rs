//! Destination planning for downloads.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::sanitize_folder_name;
use crate::media::MediaUnit;

/// Filename template for standalone videos unless overridden.
pub const DEFAULT_SINGLE_TEMPLATE: &str =
    "%(title)s_%(height)s_%(fps)s_%(vcodec.:4)s_(%(id)s).%(ext)s";

/// Filename template for collection entries unless overridden. The
/// `playlist_index&` expression emits the index prefix only when the
/// downloader knows one.
pub const DEFAULT_PLAYLIST_TEMPLATE: &str =
    "%(playlist_index& - |)s%(title)s_%(height)s_%(fps)s_%(vcodec.:4)s_(%(id)s).%(ext)s";

/// Where a unit's files land and how they are named.
///
/// The template is an opaque format string owned by the external
/// downloader; it is passed through verbatim, never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPlan {
    pub directory: PathBuf,
    pub template: String,
}

impl DestinationPlan {
    /// Full output template handed to the downloader as the `-o` value.
    pub fn output_template(&self) -> String {
        self.directory
            .join(&self.template)
            .to_string_lossy()
            .into_owned()
    }
}

/// Compute the destination for a unit of work.
///
/// Collections get their own folder under the base directory, named after
/// the sanitized collection title. Standalone videos land in the base
/// directory directly.
pub fn plan_destination(config: &Config, unit: &MediaUnit) -> DestinationPlan {
    let base_dir = config.download_directory();

    if unit.is_collection {
        DestinationPlan {
            directory: base_dir.join(sanitize_folder_name(&unit.title)),
            template: config.output.playlist_template.clone(),
        }
    } else {
        DestinationPlan {
            directory: base_dir,
            template: config.output.single_template.clone(),
        }
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
