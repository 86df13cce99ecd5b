//! Build mode selection.
//!
//! The mode is read once from the environment at startup and stays fixed for
//! the whole assembly. Everything downstream branches on plain data, never on
//! the environment again.

use serde::{Deserialize, Serialize};

/// Active build mode for a configuration assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Optimized output: minification, CSS extraction, chunk splitting.
    Production,
    /// Fast rebuilds: inline styles, source maps, local dev server.
    #[default]
    Development,
}

impl BuildMode {
    /// Resolve the mode from `NODE_ENV`.
    ///
    /// `"production"` selects [`BuildMode::Production`]; any other value,
    /// including an unset variable, selects [`BuildMode::Development`].
    pub fn from_env() -> Self {
        match std::env::var("NODE_ENV") {
            Ok(value) if value == "production" => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, BuildMode::Development)
    }

    fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Production => "production",
            BuildMode::Development => "development",
        }
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(BuildMode::Production),
            "development" | "dev" => Ok(BuildMode::Development),
            other => Err(format!(
                "invalid mode '{}' (expected 'production' or 'development')",
                other
            )),
        }
    }
}
