//! Error types for mdextract

/// Main error type for mdextract operations
///
/// Scanning and rendering never fail; these errors come from the
/// surfaces around them (configuration files, the file-system host,
/// item activation).
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A link target that does not resolve to any note
    #[error("Cannot resolve link target: {0}")]
    UnresolvedLink(String),

    /// Activation of an item that is not in the current view
    #[error("No item {index} in the current view ({count} item(s))")]
    ItemOutOfRange {
        /// Requested 1-based item number
        index: usize,
        /// Number of items in the view
        count: usize,
    },

    /// Activation of an item that has no affordance of the requested kind
    #[error("Item {index} has no {affordance}")]
    MissingAffordance {
        /// Requested 1-based item number
        index: usize,
        /// What was asked for ("link", "line to jump to")
        affordance: &'static str,
    },
}

/// Result type alias for mdextract operations
pub type Result<T> = std::result::Result<T, ExtractError>;
