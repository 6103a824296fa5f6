//! Helper utilities

use std::path::Path;

/// Split a document into lines on `\n`, the way the host hands lines to the
/// heading scanner.
///
/// A trailing newline yields a final empty line, and `\r` is left in place.
///
/// # Examples
/// ```
/// let lines: Vec<_> = mdextract::helpers::split_lines("a\nb\n").collect();
/// assert_eq!(lines, vec!["a", "b", ""]);
/// ```
pub fn split_lines(content: &str) -> std::str::Split<'_, char> {
    content.split('\n')
}

/// Check if a link target points outside the vault (`https://…`, `mailto:…`)
pub fn is_external_url(target: &str) -> bool {
    target.contains("://") || target.starts_with("mailto:")
}

/// Check if a path has one of the given note extensions (case-insensitive)
pub fn has_note_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}

/// Strip a `#heading` or `^block` suffix from a link target.
///
/// # Examples
/// ```
/// assert_eq!(mdextract::helpers::link_path("Note#Section"), "Note");
/// assert_eq!(mdextract::helpers::link_path("Note#^block"), "Note");
/// assert_eq!(mdextract::helpers::link_path("#Local"), "");
/// ```
pub fn link_path(target: &str) -> &str {
    target.split('#').next().unwrap_or(target).trim()
}
