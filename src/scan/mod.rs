//! Single-pass line and inline scanners
//!
//! Both scanners are pure functions over borrowed text. Their iterators are
//! lazy and `Clone`, so a scan can be restarted from any point by cloning it.

mod headings;
mod links;

pub use headings::{ListHeadings, match_list_heading, scan_list_headings};
pub use links::{LinkSpans, Segments, scan_links, segments};
