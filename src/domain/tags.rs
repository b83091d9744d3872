//! Tag parsing for the comma-separated tags field

/// Split a comma-separated tags field into individual tags.
/// Segments are trimmed, empty segments are dropped, order is preserved
/// and duplicates are kept.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags back into the editable comma-separated form
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
