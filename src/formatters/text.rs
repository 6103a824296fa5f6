//! Plain text output formatter

use crate::render::{Inline, RenderItem, RenderNode};

/// Format a render tree as plain text, one line per node or item.
///
/// Links are written back in wikilink form so the target stays visible,
/// and each jump affordance prints `jump_icon` with its 1-based line.
pub fn format_text(tree: &[RenderNode], jump_icon: &str) -> String {
    let mut output = Vec::new();

    for node in tree {
        match node {
            RenderNode::Title { text } | RenderNode::Status { text } => output.push(text.clone()),
            RenderNode::List { items } if items.is_empty() => output.push("(none)".to_string()),
            RenderNode::List { items } => {
                for (idx, item) in items.iter().enumerate() {
                    output.push(format!("{}. {}", idx + 1, format_item(item, jump_icon)));
                }
            }
        }
    }

    output.join("\n")
}

/// Format a single row
pub fn format_item(item: &RenderItem, jump_icon: &str) -> String {
    let mut line = String::new();
    for inline in &item.inlines {
        match inline {
            Inline::Text { text } => line.push_str(text),
            Inline::Marker { text } => {
                line.push_str(text);
                line.push(' ');
            }
            Inline::Link { target, text } if target == text => {
                line.push_str(&format!("[[{}]]", target));
            }
            Inline::Link { target, text } => {
                line.push_str(&format!("[[{}|{}]]", target, text));
            }
            Inline::Jump { line: target_line } => {
                line.push_str(&format!(" {} line {}", jump_icon, target_line + 1));
            }
        }
    }
    line
}
