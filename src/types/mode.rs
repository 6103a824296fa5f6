//! View selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extraction is rendered for the active document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Outgoing links from the document's link index
    #[default]
    Links,
    /// Headings nested in bullet list items
    Headings,
}

impl ScanMode {
    /// Heading shown above the rendered list
    pub fn title(self) -> &'static str {
        match self {
            ScanMode::Links => "Links in this page:",
            ScanMode::Headings => "List-style Headings:",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Links => write!(f, "links"),
            ScanMode::Headings => write!(f, "headings"),
        }
    }
}
