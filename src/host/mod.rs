//! Host adapter boundary
//!
//! The scanners never talk to the application hosting them. Everything
//! they need from it (the active document, its link index, a cursor, a
//! place to draw) goes through [`Host`], which is only wired up at the
//! composition boundary.

#[cfg(feature = "fs")]
mod fs;

#[cfg(feature = "fs")]
pub use fs::{CursorRequest, FsHost};

use crate::index::LinkIndex;
use crate::render::RenderNode;
use crate::types::Result;
use std::path::{Path, PathBuf};

/// A document as handed over by the host: its path and full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path of the document (used as the source of relative links)
    pub path: PathBuf,
    /// Full text content
    pub content: String,
}

impl Document {
    /// Create a new document
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Display name of the document
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Capabilities the extractor needs from its host application.
pub trait Host {
    /// The document currently open, if any
    fn active_document(&self) -> Option<Document>;

    /// Precomputed outgoing links of `document`
    fn link_index(&self, document: &Document) -> LinkIndex;

    /// Move the editing cursor to a 0-based line of the active document
    fn set_cursor(&mut self, line: usize);

    /// Open `target`, resolved relative to `source_path`
    fn open_link(&mut self, target: &str, source_path: &Path) -> Result<()>;

    /// Replace whatever was drawn before with `tree`
    fn render_tree(&mut self, tree: &[RenderNode]);
}
