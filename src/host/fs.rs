//! File-system host: notes in a vault directory on disk

use super::{Document, Host};
use crate::config::Config;
use crate::helpers::{has_note_extension, link_path};
use crate::index::{LinkIndex, build_link_index};
use crate::render::RenderNode;
use crate::types::{ExtractError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A request to move the cursor, as recorded by [`FsHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorRequest {
    /// Document the cursor is in
    pub path: PathBuf,
    /// 0-based line
    pub line: usize,
}

impl CursorRequest {
    /// Editor-style `path:line` location (1-based line)
    pub fn location(&self) -> String {
        format!("{}:{}", self.path.display(), self.line + 1)
    }
}

/// Host backed by a vault directory.
///
/// The active document is read from disk on every render, so edits made
/// between renders are always picked up.
#[derive(Debug)]
pub struct FsHost {
    vault: PathBuf,
    extensions: Vec<String>,
    active: Option<PathBuf>,
    cursor: Option<CursorRequest>,
    tree: Vec<RenderNode>,
}

impl FsHost {
    /// Create a host for `vault` with the default note extensions
    pub fn new(vault: impl Into<PathBuf>) -> Self {
        Self::with_config(vault, &Config::default())
    }

    /// Create a host for `vault` using the note extensions from `config`
    pub fn with_config(vault: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            vault: vault.into(),
            extensions: config.extensions.clone(),
            active: None,
            cursor: None,
            tree: Vec::new(),
        }
    }

    /// Root directory of the vault
    pub fn vault(&self) -> &Path {
        &self.vault
    }

    /// Make `path` the active document
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ExtractError::FileNotFound(path.display().to_string()));
        }
        log::info!("opened {}", path.display());
        self.active = Some(path.to_path_buf());
        self.cursor = None;
        Ok(())
    }

    /// Path of the active document
    pub fn active_path(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    /// Last cursor request, if any
    pub fn cursor(&self) -> Option<&CursorRequest> {
        self.cursor.as_ref()
    }

    /// Take the last cursor request, leaving none
    pub fn take_cursor(&mut self) -> Option<CursorRequest> {
        self.cursor.take()
    }

    /// Tree passed to the last [`Host::render_tree`] call
    pub fn last_tree(&self) -> &[RenderNode] {
        &self.tree
    }

    /// Resolve a link target to a note in the vault.
    ///
    /// Tries, in order: the target relative to the source document's
    /// directory, then relative to the vault root (each as written and with
    /// every note extension appended), then any note in the vault whose file
    /// name matches the target's (case-insensitive). A target made only of a
    /// `#heading` suffix resolves to the source document itself.
    pub fn resolve(&self, target: &str, source_path: &Path) -> Option<PathBuf> {
        let name = link_path(target).replace("%20", " ");
        if name.is_empty() {
            return source_path.is_file().then(|| source_path.to_path_buf());
        }

        let source_dir = source_path.parent().unwrap_or(self.vault.as_path());
        for base in [source_dir, self.vault.as_path()] {
            let candidate = base.join(&name);
            if candidate.is_file() && has_note_extension(&candidate, &self.extensions) {
                return Some(candidate);
            }
            for ext in &self.extensions {
                let candidate = base.join(format!("{name}.{ext}"));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }

        let stem = Path::new(&name).file_stem()?.to_string_lossy().to_lowercase();
        WalkDir::new(&self.vault)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .find(|p| {
                p.is_file()
                    && has_note_extension(p, &self.extensions)
                    && p.file_stem()
                        .is_some_and(|s| s.to_string_lossy().to_lowercase() == stem)
            })
    }
}

impl Host for FsHost {
    fn active_document(&self) -> Option<Document> {
        let path = self.active.as_ref()?;
        match std::fs::read_to_string(path) {
            Ok(content) => Some(Document::new(path.clone(), content)),
            Err(e) => {
                log::warn!("cannot read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn link_index(&self, document: &Document) -> LinkIndex {
        build_link_index(&document.content)
    }

    fn set_cursor(&mut self, line: usize) {
        let Some(path) = self.active.clone() else {
            log::warn!("cursor request for line {} with no active file", line + 1);
            return;
        };
        log::debug!("cursor -> {}:{}", path.display(), line + 1);
        self.cursor = Some(CursorRequest { path, line });
    }

    fn open_link(&mut self, target: &str, source_path: &Path) -> Result<()> {
        let path = self
            .resolve(target, source_path)
            .ok_or_else(|| ExtractError::UnresolvedLink(target.to_string()))?;
        log::info!("following {} to {}", target, path.display());
        self.active = Some(path);
        self.cursor = None;
        Ok(())
    }

    fn render_tree(&mut self, tree: &[RenderNode]) {
        self.tree = tree.to_vec();
    }
}
