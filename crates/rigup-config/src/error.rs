//! Error types for configuration assembly and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Assembly errors (fatal at finalize time)
    #[error("no entry modules registered")]
    NoEntries,

    #[error("no output descriptor registered")]
    MissingOutput,

    // Malformed caller input (surfaced immediately, never caught)
    #[error("invalid match pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue {
        field: String,
        hint: Option<String>,
    },

    // Manifest discovery/loading errors
    #[error("project manifest not found")]
    NotFound,

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}{}", .hint.as_ref().map(|h| format!(" ({h})")).unwrap_or_default())]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry module not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
