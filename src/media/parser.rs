//! Parsing of the downloader's JSON metadata dump into media units.

use serde_json::Value;
use url::Url;

use crate::media::{MediaItem, MediaUnit};

/// Title used when a collection dump carries no usable title.
pub const FALLBACK_COLLECTION_TITLE: &str = "playlist";

/// Title used when a standalone video dump carries no usable title.
pub const FALLBACK_VIDEO_TITLE: &str = "video";

/// Parse a metadata dump into a [`MediaUnit`].
///
/// A dump is treated as a collection when it declares `_type: "playlist"`
/// or carries an `entries` array; anything else is a standalone video.
/// Missing titles and URLs get fallbacks rather than failing the parse.
pub fn parse_dump(dump: &Value, input_url: &str) -> MediaUnit {
    let entries = dump.get("entries").and_then(Value::as_array);
    let is_collection = entries.is_some()
        || dump.get("_type").and_then(Value::as_str) == Some("playlist");

    let canonical_url = str_field(dump, "webpage_url")
        .unwrap_or_else(|| input_url.to_string());

    if is_collection {
        let title = str_field(dump, "title")
            .or_else(|| str_field(dump, "playlist_title"))
            .unwrap_or_else(|| FALLBACK_COLLECTION_TITLE.to_string());

        let items = entries
            .map(|list| {
                list.iter()
                    .enumerate()
                    .map(|(i, entry)| parse_entry(entry, i + 1, &title))
                    .collect()
            })
            .unwrap_or_default();

        MediaUnit {
            title,
            is_collection: true,
            canonical_url,
            items,
        }
    } else {
        MediaUnit {
            title: str_field(dump, "title")
                .unwrap_or_else(|| FALLBACK_VIDEO_TITLE.to_string()),
            is_collection: false,
            canonical_url,
            items: Vec::new(),
        }
    }
}

/// Parse one flat-playlist entry into a [`MediaItem`].
fn parse_entry(entry: &Value, index: usize, collection_title: &str) -> MediaItem {
    let title = str_field(entry, "title").unwrap_or_else(|| format!("Item {index}"));

    MediaItem {
        url: resolve_entry_url(entry),
        title,
        index,
        collection_title: Some(collection_title.to_string()),
    }
}

/// Resolve an entry's download URL.
///
/// Flat-playlist entries sometimes carry a bare video id in the `url`
/// field instead of a fetchable address, so anything that does not parse
/// as http(s) is discarded and the canonical watch URL is rebuilt from
/// the entry id instead.
fn resolve_entry_url(entry: &Value) -> Option<String> {
    if let Some(raw) = entry.get("url").and_then(Value::as_str) {
        if is_http_url(raw) {
            return Some(raw.to_string());
        }
    }

    str_field(entry, "id").map(|id| format!("https://www.youtube.com/watch?v={id}"))
}

/// Whether `raw` parses as a fetchable http(s) URL.
///
/// Shared with the browser tab reader, which rejects internal pages
/// (`chrome://` and friends) on the same rule.
pub fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Non-empty string field lookup.
fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
