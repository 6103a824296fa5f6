//! Headings written inside bullet list items
//!
//! Matches `- ## Title`, `* # Title` and `+ ###### Title`, optionally indented.
//! Ordered-list markers (`1.`) are not recognised.

use crate::types::HeadingMatch;
use regex::Regex;
use std::iter::{Enumerate, FusedIterator};
use std::sync::LazyLock;

/// Bullet marker, 1–6 `#`, then the title
static LIST_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(#{1,6})\s+([^\r]*)$").expect("valid regex"));

/// Match a single line, reporting it at `line_index`.
///
/// The title may not contain `\r`, so a CRLF line split on `\n` alone is not
/// a heading.
///
/// # Examples
/// ```
/// let heading = mdextract::scan::match_list_heading("- ## Example", 4).unwrap();
/// assert_eq!(heading.depth, 2);
/// assert_eq!(heading.title, "Example");
/// assert_eq!(heading.source_line_index, 4);
/// ```
pub fn match_list_heading(line: &str, line_index: usize) -> Option<HeadingMatch> {
    let cap = LIST_HEADING_RE.captures(line)?;
    Some(HeadingMatch {
        depth: cap[1].len(),
        title: cap[2].to_string(),
        source_line_index: line_index,
    })
}

/// Scan an ordered sequence of lines for list-style headings.
///
/// Accepts anything that yields string-like lines: `&[&str]`, `Vec<String>`,
/// or [`crate::helpers::split_lines`] over a whole document.
///
/// # Examples
/// ```
/// use mdextract::scan::scan_list_headings;
///
/// let lines = ["# Title", "- ## Tasks", "- plain item", "  * ### Nested"];
/// let found: Vec<_> = scan_list_headings(&lines).collect();
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[1].depth, 3);
/// assert_eq!(found[1].source_line_index, 3);
/// ```
pub fn scan_list_headings<I>(lines: I) -> ListHeadings<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ListHeadings {
        lines: lines.into_iter().enumerate(),
    }
}

/// Lazy iterator over [`HeadingMatch`]es in line order.
#[derive(Debug, Clone)]
pub struct ListHeadings<I> {
    lines: Enumerate<I>,
}

impl<I> Iterator for ListHeadings<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = HeadingMatch;

    fn next(&mut self) -> Option<HeadingMatch> {
        self.lines
            .find_map(|(idx, line)| match_list_heading(line.as_ref(), idx))
    }
}

impl<I> FusedIterator for ListHeadings<I>
where
    I: FusedIterator,
    I::Item: AsRef<str>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(lines: &[&str]) -> Vec<HeadingMatch> {
        scan_list_headings(lines).collect()
    }

    #[test]
    fn test_basic_match() {
        let found = scan(&["- ## Example"]);
        assert_eq!(
            found,
            vec![HeadingMatch {
                depth: 2,
                title: "Example".to_string(),
                source_line_index: 0,
            }]
        );
    }

    #[test]
    fn test_all_bullet_markers() {
        let found = scan(&["- # Dash", "* # Star", "+ # Plus"]);
        let titles: Vec<_> = found.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Dash", "Star", "Plus"]);
    }

    #[test]
    fn test_depth_bounds() {
        let found = scan(&["- # One", "- ###### Six", "- ####### Seven"]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].depth, 1);
        assert_eq!(found[1].depth, 6);
    }

    #[test]
    fn test_indented_bullet() {
        let found = scan(&["    - ### Nested deeply", "\t* ## Tabbed"]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "Nested deeply");
        assert_eq!(found[1].depth, 2);
    }

    #[test]
    fn test_non_matches() {
        let found = scan(&[
            "## Plain heading",
            "- plain bullet",
            "-## no space after bullet",
            "- ##no space after hashes",
            "text - ## mid-line",
            "1. ## ordered",
            "",
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_title_is_verbatim() {
        let found = scan(&["- ## Title with [[Link]] and trailing  "]);
        assert_eq!(found[0].title, "Title with [[Link]] and trailing  ");
    }

    #[test]
    fn test_crlf_line_does_not_match() {
        assert!(scan(&["- ## Windows\r"]).is_empty());
        assert!(match_list_heading("- ## Windows\r", 0).is_none());
        assert!(scan(&["- ## Win\rdows"]).is_empty());
    }

    #[test]
    fn test_line_indices() {
        let found = scan(&["intro", "- # A", "body", "body", "* ## B"]);
        let lines: Vec<_> = found.iter().map(|h| h.source_line_index).collect();
        assert_eq!(lines, vec![1, 4]);
    }

    #[test]
    fn test_restartable() {
        let lines = vec!["- # A".to_string(), "- ## B".to_string()];
        let headings = scan_list_headings(&lines);
        let first: Vec<_> = headings.clone().collect();
        let second: Vec<_> = headings.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_partially_consumed_clone_resumes() {
        let lines = ["- # A", "- # B", "- # C"];
        let mut headings = scan_list_headings(&lines);
        assert_eq!(headings.next().map(|h| h.title), Some("A".to_string()));
        let rest: Vec<_> = headings.clone().map(|h| h.title).collect();
        assert_eq!(rest, vec!["B", "C"]);
        assert_eq!(headings.count(), 2);
    }
}
