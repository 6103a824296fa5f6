//! Mode-driven render selection
//!
//! [`build_view`] turns the active document into a render tree for the
//! current [`Session`]; [`render`] additionally hands that tree to the host.
//! Each call builds the view from scratch and replaces whatever was drawn
//! before.

mod session;

pub use session::Session;

use serde::Serialize;

use crate::helpers::split_lines;
use crate::host::Host;
use crate::index::LinkIndex;
use crate::scan::{scan_list_headings, segments};
use crate::types::{ExtractError, HeadingMatch, Result, ScanMode, Segment};

/// Status shown when the host has no document open
pub const NO_ACTIVE_FILE: &str = "No active file";

/// A top-level element of the extractor view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    /// View heading
    Title {
        /// Heading text
        text: String,
    },
    /// Plain status message
    Status {
        /// Message text
        text: String,
    },
    /// The extracted items
    List {
        /// Items in document order
        items: Vec<RenderItem>,
    },
}

/// One clickable row of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderItem {
    /// Row content, left to right
    pub inlines: Vec<Inline>,
    /// What clicking the row (outside any link) does
    pub action: Action,
}

/// Content of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// Literal text
    Text {
        /// Text
        text: String,
    },
    /// Heading depth marker (`##`)
    Marker {
        /// The `#` run
        text: String,
    },
    /// Clickable link
    Link {
        /// Link target
        target: String,
        /// Text shown for the link
        text: String,
    },
    /// Jump-to-line affordance
    Jump {
        /// 0-based line
        line: usize,
    },
}

/// Something the host is asked to do when an element is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Open a link target
    OpenLink {
        /// Link target
        target: String,
    },
    /// Move the cursor to a 0-based line
    JumpToLine {
        /// 0-based line
        line: usize,
    },
}

impl RenderNode {
    /// Items of a list node (empty for other nodes)
    pub fn items(&self) -> &[RenderItem] {
        match self {
            RenderNode::List { items } => items.as_slice(),
            _ => &[],
        }
    }
}

impl RenderItem {
    /// The link this row opens: its own action, or the first link inside it
    pub fn link_target(&self) -> Option<&str> {
        match &self.action {
            Action::OpenLink { target } => Some(target),
            Action::JumpToLine { .. } => self.inlines.iter().find_map(|inline| match inline {
                Inline::Link { target, .. } => Some(target.as_str()),
                _ => None,
            }),
        }
    }

    /// The line this row jumps to: its own action, or its jump affordance
    pub fn jump_line(&self) -> Option<usize> {
        match &self.action {
            Action::JumpToLine { line } => Some(*line),
            Action::OpenLink { .. } => self.inlines.iter().find_map(|inline| match inline {
                Inline::Jump { line } => Some(*line),
                _ => None,
            }),
        }
    }

    /// Row text without markup: markers, text and link display text
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for inline in &self.inlines {
            match inline {
                Inline::Text { text } => out.push_str(text),
                Inline::Marker { text } => {
                    out.push_str(text);
                    out.push(' ');
                }
                Inline::Link { text, .. } => out.push_str(text),
                Inline::Jump { .. } => {}
            }
        }
        out
    }
}

/// Build the view for the host's active document.
pub fn build_view<H: Host + ?Sized>(session: &Session, host: &H) -> Vec<RenderNode> {
    let Some(document) = host.active_document() else {
        return vec![RenderNode::Status {
            text: NO_ACTIVE_FILE.to_string(),
        }];
    };
    log::debug!("rendering {} view of {}", session.mode, document.name());

    let items = match session.mode {
        ScanMode::Links => link_items(&host.link_index(&document)),
        ScanMode::Headings => heading_items(&document.content, session.show_heading_markers),
    };

    vec![
        RenderNode::Title {
            text: session.mode.title().to_string(),
        },
        RenderNode::List { items },
    ]
}

/// Build the view and hand it to the host, returning the tree drawn.
pub fn render<H: Host + ?Sized>(session: &Session, host: &mut H) -> Vec<RenderNode> {
    let tree = build_view(session, host);
    host.render_tree(&tree);
    tree
}

/// One row per indexed link: the link, then a jump to its source line
pub fn link_items(index: &LinkIndex) -> Vec<RenderItem> {
    index
        .iter()
        .map(|link| RenderItem {
            inlines: vec![
                Inline::Link {
                    target: link.target.clone(),
                    text: link.label().to_string(),
                },
                Inline::Jump { line: link.line },
            ],
            action: Action::OpenLink {
                target: link.target.clone(),
            },
        })
        .collect()
}

/// One row per list-style heading in `content`
pub fn heading_items(content: &str, show_markers: bool) -> Vec<RenderItem> {
    scan_list_headings(split_lines(content))
        .map(|heading| heading_item(&heading, show_markers))
        .collect()
}

/// Row for a single heading; wikilinks in the title become clickable
pub fn heading_item(heading: &HeadingMatch, show_marker: bool) -> RenderItem {
    let mut inlines = Vec::new();
    if show_marker {
        inlines.push(Inline::Marker {
            text: heading.marker(),
        });
    }
    inlines.extend(segments(&heading.title).map(|segment| match segment {
        Segment::Text(text) => Inline::Text {
            text: text.to_string(),
        },
        Segment::Link(span) => Inline::Link {
            target: span.target,
            text: span.display_text,
        },
    }));

    RenderItem {
        inlines,
        action: Action::JumpToLine {
            line: heading.source_line_index,
        },
    }
}

/// Look up the `index`-th (1-based) item across the list nodes of a tree
pub fn find_item(tree: &[RenderNode], index: usize) -> Result<&RenderItem> {
    let mut items = tree.iter().flat_map(RenderNode::items);
    let count = items.clone().count();
    index
        .checked_sub(1)
        .and_then(|i| items.nth(i))
        .ok_or(ExtractError::ItemOutOfRange { index, count })
}

/// Carry out `action` on the host.
///
/// Links are resolved relative to the active document.
pub fn activate<H: Host + ?Sized>(action: &Action, host: &mut H) -> Result<()> {
    match action {
        Action::JumpToLine { line } => {
            host.set_cursor(*line);
            Ok(())
        }
        Action::OpenLink { target } => {
            let source = host
                .active_document()
                .map(|doc| doc.path)
                .unwrap_or_default();
            host.open_link(target, &source)
        }
    }
}

/// Activate the jump affordance of the `index`-th (1-based) item
pub fn jump_to_item<H: Host + ?Sized>(tree: &[RenderNode], index: usize, host: &mut H) -> Result<()> {
    let line = find_item(tree, index)?
        .jump_line()
        .ok_or(ExtractError::MissingAffordance {
            index,
            affordance: "line to jump to",
        })?;
    activate(&Action::JumpToLine { line }, host)
}

/// Open the link of the `index`-th (1-based) item
pub fn open_item<H: Host + ?Sized>(tree: &[RenderNode], index: usize, host: &mut H) -> Result<()> {
    let target = find_item(tree, index)?
        .link_target()
        .ok_or(ExtractError::MissingAffordance {
            index,
            affordance: "link",
        })?
        .to_string();
    activate(&Action::OpenLink { target }, host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{IndexedLink, LinkKind};
    use pretty_assertions::assert_eq;

    fn heading(depth: usize, title: &str, line: usize) -> HeadingMatch {
        HeadingMatch {
            depth,
            title: title.to_string(),
            source_line_index: line,
        }
    }

    #[test]
    fn test_heading_item_with_link() {
        let item = heading_item(&heading(2, "Read [[Page One|Page]] now", 7), true);
        assert_eq!(
            item.inlines,
            vec![
                Inline::Marker {
                    text: "##".to_string()
                },
                Inline::Text {
                    text: "Read ".to_string()
                },
                Inline::Link {
                    target: "Page One".to_string(),
                    text: "Page".to_string()
                },
                Inline::Text {
                    text: " now".to_string()
                },
            ]
        );
        assert_eq!(item.action, Action::JumpToLine { line: 7 });
        assert_eq!(item.link_target(), Some("Page One"));
        assert_eq!(item.jump_line(), Some(7));
        assert_eq!(item.plain_text(), "## Read Page now");
    }

    #[test]
    fn test_heading_item_without_marker() {
        let item = heading_item(&heading(1, "Plain", 0), false);
        assert_eq!(
            item.inlines,
            vec![Inline::Text {
                text: "Plain".to_string()
            }]
        );
        assert_eq!(item.link_target(), None);
    }

    #[test]
    fn test_heading_items_from_content() {
        let items = heading_items("# Doc\n- ## One\n\n* ### Two [[X]]\n", true);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].jump_line(), Some(1));
        assert_eq!(items[1].jump_line(), Some(3));
        assert_eq!(items[1].link_target(), Some("X"));
    }

    #[test]
    fn test_link_items() {
        let index: LinkIndex = vec![IndexedLink {
            target: "Page One".to_string(),
            display_text: Some("Page".to_string()),
            line: 4,
            kind: LinkKind::Wiki,
        }]
        .into_iter()
        .collect();
        let items = link_items(&index);
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].action,
            Action::OpenLink {
                target: "Page One".to_string()
            }
        );
        assert_eq!(items[0].jump_line(), Some(4));
        assert_eq!(items[0].plain_text(), "Page");
    }

    #[test]
    fn test_find_item() {
        let tree = vec![
            RenderNode::Title {
                text: "t".to_string(),
            },
            RenderNode::List {
                items: heading_items("- # A\n- # B\n", true),
            },
        ];
        assert_eq!(find_item(&tree, 2).unwrap().jump_line(), Some(1));
        assert!(matches!(
            find_item(&tree, 0),
            Err(ExtractError::ItemOutOfRange { index: 0, count: 2 })
        ));
        assert!(matches!(
            find_item(&tree, 3),
            Err(ExtractError::ItemOutOfRange { index: 3, count: 2 })
        ));
    }

    #[test]
    fn test_session_mode_switch() {
        let mut session = Session::default();
        assert_eq!(session.mode, ScanMode::Links);
        session.set_mode(ScanMode::Headings);
        assert_eq!(session.mode, ScanMode::Headings);
        assert!(session.show_heading_markers);
    }

    #[test]
    fn test_json_shape() {
        let node = RenderNode::List {
            items: vec![heading_item(&heading(1, "[[A]]", 2), true)],
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "list");
        assert_eq!(value["items"][0]["action"]["action"], "jump_to_line");
        assert_eq!(value["items"][0]["action"]["line"], 2);
        assert_eq!(value["items"][0]["inlines"][1]["type"], "link");
        assert_eq!(value["items"][0]["inlines"][1]["target"], "A");
    }
}
