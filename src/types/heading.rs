//! Headings found inside bullet list items

use serde::Serialize;

/// A heading written as the content of a bullet list item (`- ## Title`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HeadingMatch {
    /// Heading depth 1–6 (number of `#` characters).
    pub depth: usize,
    /// Text after the `#` run, verbatim.
    pub title: String,
    /// 0-based line index within the scanned line sequence.
    pub source_line_index: usize,
}

impl HeadingMatch {
    /// The `#` run for this heading, e.g. `"###"` for depth 3.
    pub fn marker(&self) -> String {
        "#".repeat(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker() {
        let heading = HeadingMatch {
            depth: 3,
            title: "Deep".to_string(),
            source_line_index: 0,
        };
        assert_eq!(heading.marker(), "###");
    }
}
