//! Configuration parsing and management

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::{ExtractError, Result, ScanMode};

/// Configuration for mdextract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// View shown when a session starts
    pub mode: ScanMode,

    /// Marker printed after each link for its jump-to-line affordance
    pub jump_icon: String,

    /// Whether heading items start with their `#` run
    pub show_heading_markers: bool,

    /// File extensions treated as notes
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ScanMode::Links,
            jump_icon: "🧷".to_string(),
            show_heading_markers: true,
            extensions: vec!["md".to_string(), "markdown".to_string()],
        }
    }
}

/// Values that replace the loaded configuration when set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    /// View to start in
    pub mode: Option<ScanMode>,

    /// Jump affordance marker
    pub jump_icon: Option<String>,

    /// Whether heading items start with their `#` run
    pub show_heading_markers: Option<bool>,
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ExtractError::FileNotFound(path.display().to_string()));
        }
        let ext = path.extension().and_then(|e| e.to_str());

        let config = match ext {
            Some("json") => Self::from_json_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("toml") => Self::from_toml_file(path),
            _ => {
                // Try JSON first, then YAML, then TOML
                Self::from_json_file(path)
                    .or_else(|_| Self::from_yaml_file(path))
                    .or_else(|_| Self::from_toml_file(path))
            }
        }?;
        config.validate()?;
        Ok(config)
    }

    /// Config file names to search for during auto-discovery
    const DISCOVERY_NAMES: [&'static str; 5] = [
        ".mdextract.json",
        ".mdextract.yaml",
        ".mdextract.yml",
        ".mdextract.toml",
        ".mdextractrc",
    ];

    /// Walk up from `start_dir` looking for a config file
    pub fn discover(start_dir: impl AsRef<Path>) -> Option<Self> {
        let mut dir = start_dir.as_ref().to_path_buf();
        loop {
            for name in &Self::DISCOVERY_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    match Self::from_file(&candidate) {
                        Ok(config) => {
                            log::debug!("using config {}", candidate.display());
                            return Some(config);
                        }
                        Err(e) => log::warn!("ignoring {}: {}", candidate.display(), e),
                    }
                }
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Merge overrides into this configuration
    pub fn merge(&mut self, other: ConfigOverrides) {
        if let Some(mode) = other.mode {
            self.mode = mode;
        }
        if let Some(jump_icon) = other.jump_icon {
            self.jump_icon = jump_icon;
        }
        if let Some(show) = other.show_heading_markers {
            self.show_heading_markers = show;
        }
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "`extensions` must list at least one file extension".to_string(),
            ));
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.is_empty() || e.starts_with('.')) {
            return Err(ExtractError::InvalidConfig(format!(
                "extension {ext:?} must be non-empty and given without a leading dot"
            )));
        }
        if self.jump_icon.contains('\n') {
            return Err(ExtractError::InvalidConfig(
                "`jump_icon` must fit on one line".to_string(),
            ));
        }
        Ok(())
    }
}
