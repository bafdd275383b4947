//! Slug helpers.
//!
//! Slugs come from file and directory names; titles are derived back from
//! slugs when a section or item does not declare one.

use std::path::Path;

/// Convert a slug to a human-readable title.
///
/// Splits on `-`, uppercases the first character of every word and joins the
/// words with spaces. Empty words (from `--`) are kept, so the number of
/// separators is preserved.
///
/// ```ignore
/// assert_eq!(slug_to_title("technical-sessions"), "Technical Sessions");
/// ```
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Slug of an item file: its file name with the extension stripped.
///
/// Returns `None` when the name is not valid UTF-8 or the stem is empty.
pub fn slug_from_path(path: &Path) -> Option<&str> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
}

/// Slug of a section directory: its final path component.
pub fn slug_from_dir(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
}
