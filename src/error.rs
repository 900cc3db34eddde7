//! Domain error types for pickbox
//!
//! - `ConfigError` for loading and validating configuration
//! - `PickboxError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for pickbox
#[derive(Debug, Error)]
pub enum PickboxError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No fields configured")]
    NoFields,

    #[error("Field '{field}' has an option with an empty label")]
    EmptyLabel { field: String },

    #[error("Field '{field}' lists option '{label}' more than once")]
    DuplicateLabel { field: String, label: String },
}

/// Result type alias for PickboxError
pub type Result<T> = std::result::Result<T, PickboxError>;
