//! Media model module.
//!
//! Provides:
//! - Media unit and item types
//! - Metadata dump parsing

pub mod parser;
pub mod unit;

pub use parser::{is_http_url, parse_dump};
pub use unit::{MediaItem, MediaUnit, MetadataResult};
