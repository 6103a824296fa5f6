//! Per-document link index
//!
//! The index stands in for the host's metadata cache: links are collected
//! from the Markdown AST, so links inside code spans and code blocks are not
//! reported, and each link keeps the line it was written on.

use comrak::{
    Arena, Options,
    nodes::{AstNode, NodeValue},
};
use serde::Serialize;

use crate::helpers::is_external_url;

/// How a link was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// `[[target]]` / `[[target|alias]]`
    Wiki,
    /// `[text](target)`
    Markdown,
}

/// A link recorded in a document's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedLink {
    /// Link target as written
    pub target: String,
    /// Display text, when it differs from the target
    pub display_text: Option<String>,
    /// 0-based source line
    pub line: usize,
    /// Link syntax
    pub kind: LinkKind,
}

impl IndexedLink {
    /// Text to show for this link: the display text if any, else the target
    pub fn label(&self) -> &str {
        self.display_text.as_deref().unwrap_or(&self.target)
    }
}

/// Outgoing links of one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkIndex {
    /// Indexed links
    pub links: Vec<IndexedLink>,
}

impl LinkIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a link
    pub fn push(&mut self, link: IndexedLink) {
        self.links.push(link);
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if the index has no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterate over links in document order
    pub fn iter(&self) -> std::slice::Iter<'_, IndexedLink> {
        self.links.iter()
    }
}

impl<'a> IntoIterator for &'a LinkIndex {
    type Item = &'a IndexedLink;
    type IntoIter = std::slice::Iter<'a, IndexedLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

impl FromIterator<IndexedLink> for LinkIndex {
    fn from_iter<T: IntoIterator<Item = IndexedLink>>(iter: T) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

/// Build the link index for a document.
///
/// External URLs are left out; only links into the vault are indexed.
pub fn build_link_index(content: &str) -> LinkIndex {
    let arena = Arena::new();
    let mut options = Options::default();

    options.extension.wikilinks_title_after_pipe = true;
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    let root = comrak::parse_document(&arena, content, &options);

    let mut index = LinkIndex::new();
    collect_links(root, &mut index);
    log::debug!("indexed {} link(s)", index.len());
    index
}

/// Recursively collect text content from a node's children
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    let data = node.data.borrow();

    match &data.value {
        NodeValue::Text(cow) => text.push_str(cow),
        NodeValue::Code(code) => text.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
        _ => {}
    }

    drop(data);
    for child in node.children() {
        text.push_str(&collect_text(child));
    }

    text
}

/// Walk the AST in document order, recording wikilinks and internal links
fn collect_links<'a>(node: &'a AstNode<'a>, index: &mut LinkIndex) {
    let data = node.data.borrow();
    let line = data.sourcepos.start.line.saturating_sub(1);

    let found = match &data.value {
        NodeValue::WikiLink(link) => Some((link.url.clone(), LinkKind::Wiki)),
        NodeValue::Link(link) if !is_external_url(&link.url) => {
            Some((link.url.clone(), LinkKind::Markdown))
        }
        _ => None,
    };

    // Drop the borrow before reading children
    drop(data);

    if let Some((target, kind)) = found {
        if target.is_empty() {
            return;
        }
        let text = collect_text(node);
        let display_text = (!text.is_empty() && text != target).then_some(text);
        index.push(IndexedLink {
            target,
            display_text,
            line,
            kind,
        });
        return;
    }

    for child in node.children() {
        collect_links(child, index);
    }
}
