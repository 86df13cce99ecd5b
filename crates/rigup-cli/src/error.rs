//! Error handling for the rigup CLI.

use std::path::PathBuf;

use rigup_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration assembly or validation errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to write the emitted configuration
    #[error("failed to write {}: {}", .0.display(), .1)]
    Write(PathBuf, #[source] std::io::Error),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a CLI error into a miette diagnostic, attaching an actionable
/// hint where one exists.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    let help = match &err {
        CliError::Config(ConfigError::NoEntries) => {
            Some("register at least one entry module, or set 'entry' in rigup.toml")
        }
        CliError::Config(ConfigError::MissingOutput) => {
            Some("set 'output_dir' in rigup.toml or use the standard preset")
        }
        CliError::Config(ConfigError::EntryNotFound { .. }) => {
            Some("entry modules are resolved relative to --root")
        }
        CliError::Config(ConfigError::TemplateNotFound { .. }) => {
            Some("the html plugin's 'template' path is resolved relative to --root")
        }
        _ => None,
    };

    match help {
        Some(help) => miette::miette!(help = help, "{}", err),
        None => miette::miette!("{}", err),
    }
}
