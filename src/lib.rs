//! # mdextract
//!
//! Extracts two views of a Markdown note for display in a side panel:
//! its outgoing links, and the headings written inside bullet list items
//! (`- ## Title`), which ordinary heading outlines do not show.
//!
//! ## Features
//!
//! - **List-style heading scanner** over a document's lines
//! - **Wikilink scanner** splitting text into literal and `[[link]]` segments
//! - **Link index** of wikilinks and internal Markdown links with source lines
//! - **Host adapter** trait so any editor or UI can drive the views
//! - **Configuration** via JSON, YAML, or TOML files
//!
//! ## Quick Start
//!
//! ```rust
//! use mdextract::scan::{scan_links, scan_list_headings};
//!
//! let lines = ["# Notes", "- ## Reading [[Book|the book]]", "- not a heading"];
//! let headings: Vec<_> = scan_list_headings(&lines).collect();
//! assert_eq!(headings.len(), 1);
//! assert_eq!(headings[0].depth, 2);
//!
//! let links: Vec<_> = scan_links(&headings[0].title).collect();
//! assert_eq!(links[0].target, "Book");
//! assert_eq!(links[0].display_text, "the book");
//! ```
//!
//! ## Rendering through a host
//!
//! ```rust,no_run
//! # #[cfg(feature = "fs")]
//! # fn main() -> mdextract::Result<()> {
//! use mdextract::{FsHost, ScanMode, Session, formatters, render};
//!
//! let mut host = FsHost::new("vault");
//! host.open("vault/Home.md")?;
//! let tree = render(&Session::new(ScanMode::Headings), &mut host);
//! println!("{}", formatters::format_text(&tree, "🧷"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "fs"))]
//! # fn main() {}
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod formatters;
pub mod helpers;
pub mod host;
pub mod index;
pub mod render;
pub mod scan;
pub mod types;

// Re-export main types and functions
pub use config::{Config, ConfigOverrides};
pub use host::{Document, Host};
pub use index::{IndexedLink, LinkIndex, LinkKind, build_link_index};
pub use render::{
    Action, Inline, RenderItem, RenderNode, Session, activate, build_view, render,
};
pub use scan::{scan_links, scan_list_headings, segments};
pub use types::{ExtractError, HeadingMatch, LinkSpan, Result, ScanMode, Segment};

#[cfg(feature = "fs")]
pub use host::{CursorRequest, FsHost};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}
