//! Units of work resolved from a URL.

/// One downloadable entry within a [`MediaUnit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Direct URL for this entry, when one could be resolved.
    pub url: Option<String>,

    /// Entry title, or a positional placeholder when the source had none.
    pub title: String,

    /// 1-based position within the collection.
    pub index: usize,

    /// Title of the owning collection, for notification context.
    pub collection_title: Option<String>,
}

impl MediaItem {
    /// Label shown in notifications, prefixed with the collection title
    /// when the entry belongs to one.
    pub fn display_label(&self) -> String {
        match &self.collection_title {
            Some(collection) => format!("{} - {}", collection, self.title),
            None => self.title.clone(),
        }
    }
}

/// A resolved unit of work: one standalone video or a whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUnit {
    /// Display title of the unit.
    pub title: String,

    /// Whether this unit expands to multiple entries.
    pub is_collection: bool,

    /// Canonical URL to feed to the download step.
    pub canonical_url: String,

    /// Entries in collection order. Empty for standalone videos.
    pub items: Vec<MediaItem>,
}

impl MediaUnit {
    /// Unit addressing a URL directly, used when metadata resolution fails
    /// and the download should still be attempted against the raw URL.
    pub fn fallback(url: &str) -> Self {
        Self {
            title: url.to_string(),
            is_collection: false,
            canonical_url: url.to_string(),
            items: Vec::new(),
        }
    }

    /// View a standalone unit as the single item it downloads.
    pub fn as_single_item(&self) -> MediaItem {
        MediaItem {
            url: Some(self.canonical_url.clone()),
            title: self.title.clone(),
            index: 1,
            collection_title: None,
        }
    }
}

/// Result of resolving a URL's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataResult {
    /// The metadata command succeeded and its output parsed.
    Resolved(MediaUnit),

    /// The metadata command exited nonzero or produced no output.
    FetchFailed(String),

    /// The metadata command's output was not valid JSON.
    ParseFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_prefixes_collection() {
        let item = MediaItem {
            url: None,
            title: "Episode 3".to_string(),
            index: 3,
            collection_title: Some("My Series".to_string()),
        };
        assert_eq!(item.display_label(), "My Series - Episode 3");
    }

    #[test]
    fn test_display_label_plain_for_standalone() {
        let item = MediaItem {
            url: None,
            title: "A Video".to_string(),
            index: 1,
            collection_title: None,
        };
        assert_eq!(item.display_label(), "A Video");
    }

    #[test]
    fn test_fallback_addresses_raw_url() {
        let unit = MediaUnit::fallback("https://example.com/v/1");
        assert!(!unit.is_collection);
        assert_eq!(unit.canonical_url, "https://example.com/v/1");
        assert_eq!(unit.title, "https://example.com/v/1");
        assert!(unit.items.is_empty());
    }

    #[test]
    fn test_as_single_item_carries_canonical_url() {
        let unit = MediaUnit {
            title: "A Video".to_string(),
            is_collection: false,
            canonical_url: "https://www.youtube.com/watch?v=abc".to_string(),
            items: Vec::new(),
        };
        let item = unit.as_single_item();
        assert_eq!(item.url.as_deref(), Some("https://www.youtube.com/watch?v=abc"));
        assert_eq!(item.index, 1);
        assert!(item.collection_title.is_none());
    }
}
