//! Output formatters for render trees

mod json;
mod text;

pub use json::format_json;
pub use text::{format_item, format_text};
