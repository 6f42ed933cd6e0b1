//! Folder name sanitization for collection titles.

/// Name used when a collection title sanitizes down to nothing usable.
pub const FALLBACK_FOLDER_NAME: &str = "playlist";

/// Sanitize a collection title so it is safe to use as a directory name.
///
/// Replaces characters that filesystems or shells reject with underscores
/// and trims surrounding whitespace. Titles that collapse to an empty or
/// dot-only name get [`FALLBACK_FOLDER_NAME`] instead.
pub fn sanitize_folder_name(title: &str) -> String {
    let sanitized: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | ';' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = sanitized.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        FALLBACK_FOLDER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
