//! Inline wikilink scanner
//!
//! A span opens at `[[` and closes at the first `]]`, with no `]` in between.
//! An optional `|` splits the target from a display alias. Nested or
//! overlapping brackets get no special treatment: in `[[a [[b]]` the span
//! starts at the first `[[` and its target is `a [[b`. The first valid `]]`
//! always ends a span.

use crate::types::{LinkSpan, Segment};
use regex::Regex;
use std::iter::FusedIterator;
use std::sync::LazyLock;

/// `[[target]]` or `[[target|alias]]`
static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\]|]+)(?:\|([^\]]+))?\]\]").expect("valid regex")
});

/// Scan `text` for wikilink spans, left to right.
///
/// # Examples
/// ```
/// let spans: Vec<_> = mdextract::scan::scan_links("See [[Page One|Page]] for details").collect();
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].target, "Page One");
/// assert_eq!(spans[0].display_text, "Page");
/// assert_eq!((spans[0].start_offset, spans[0].end_offset), (4, 21));
/// ```
pub fn scan_links(text: &str) -> LinkSpans<'_> {
    LinkSpans { text, pos: 0 }
}

/// Split `text` into literal segments and link spans.
///
/// The segments cover the input in order: joining each segment's
/// [`Segment::source`] reproduces `text` exactly.
///
/// # Examples
/// ```
/// use mdextract::Segment;
///
/// let text = "a [[B]] c";
/// let parts: Vec<_> = mdextract::scan::segments(text).collect();
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts[0], Segment::Text("a "));
/// let joined: String = parts.iter().map(|s| s.source(text)).collect();
/// assert_eq!(joined, text);
/// ```
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        pos: 0,
        pending: None,
        spans: scan_links(text),
    }
}

/// Lazy iterator over the [`LinkSpan`]s of a string.
#[derive(Debug, Clone)]
pub struct LinkSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for LinkSpans<'_> {
    type Item = LinkSpan;

    fn next(&mut self) -> Option<LinkSpan> {
        if self.pos >= self.text.len() {
            return None;
        }
        let Some(cap) = WIKILINK_RE.captures_at(self.text, self.pos) else {
            self.pos = self.text.len();
            return None;
        };
        let whole = cap.get(0)?;
        let target = cap[1].to_string();
        let display_text = cap
            .get(2)
            .map_or_else(|| target.clone(), |alias| alias.as_str().to_string());

        // Matches are at least five bytes long, so this always advances.
        self.pos = whole.end();

        Some(LinkSpan {
            target,
            display_text,
            start_offset: whole.start(),
            end_offset: whole.end(),
        })
    }
}

impl FusedIterator for LinkSpans<'_> {}

/// Lazy iterator over the [`Segment`]s of a string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
    pending: Option<LinkSpan>,
    spans: LinkSpans<'a>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(span) = self.pending.take() {
            self.pos = span.end_offset;
            return Some(Segment::Link(span));
        }
        if self.pos >= self.text.len() {
            return None;
        }

        match self.spans.next() {
            Some(span) if span.start_offset > self.pos => {
                let gap = &self.text[self.pos..span.start_offset];
                self.pos = span.start_offset;
                self.pending = Some(span);
                Some(Segment::Text(gap))
            }
            Some(span) => {
                self.pos = span.end_offset;
                Some(Segment::Link(span))
            }
            None => {
                let rest = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Segment::Text(rest))
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}
