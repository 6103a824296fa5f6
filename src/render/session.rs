//! Explicit view state carried between renders

use crate::config::Config;
use crate::types::ScanMode;

/// State of one extractor view.
///
/// The mode survives document switches; it only changes when the user
/// picks the other view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Which extraction is shown
    pub mode: ScanMode,
    /// Whether heading items start with their `#` run
    pub show_heading_markers: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            show_heading_markers: true,
        }
    }
}

impl Session {
    /// Start a session in `mode`
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Start a session from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.mode,
            show_heading_markers: config.show_heading_markers,
        }
    }

    /// Switch to another view
    pub fn set_mode(&mut self, mode: ScanMode) {
        self.mode = mode;
    }
}
