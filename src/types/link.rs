//! Wikilink spans and the segments they split a string into

use serde::Serialize;

/// A `[[target]]` or `[[target|display]]` occurrence in a string.
///
/// Offsets are a half-open byte range into the scanned string covering the
/// whole bracketed extent, brackets included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LinkSpan {
    /// Link target (never empty)
    pub target: String,
    /// Alias after `|`, or the target when there is none
    pub display_text: String,
    /// Byte offset of the opening `[[`
    pub start_offset: usize,
    /// Byte offset just past the closing `]]`
    pub end_offset: usize,
}

impl LinkSpan {
    /// The bracketed text this span was scanned from.
    ///
    /// `text` must be the string the span was produced from.
    pub fn original<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start_offset..self.end_offset]
    }
}

/// One piece of a segmented string: literal text or a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text between links
    Text(&'a str),
    /// A wikilink span
    Link(LinkSpan),
}

impl<'a> Segment<'a> {
    /// The input text this segment covers.
    pub fn source(&self, text: &'a str) -> &'a str {
        match self {
            Segment::Text(s) => *s,
            Segment::Link(span) => span.original(text),
        }
    }
}
