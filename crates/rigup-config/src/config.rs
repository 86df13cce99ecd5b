//! The finalized, externally-consumable configuration object.
//!
//! [`BundlerConfig`] is the one artifact this crate produces: a plain,
//! serializable object with no residual conditionals. It is handed to the
//! external bundler runtime (as JSON) and never mutated afterwards.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::output::{OutputOptions, SplitChunks};
use crate::plugin::PluginDescriptor;
use crate::rule::Rule;

/// Complete bundler configuration for one build mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub mode: BuildMode,

    /// Named entry points; each maps to an ordered list of bundle roots.
    pub entry: IndexMap<String, Vec<String>>,

    pub module: ModuleOptions,

    pub plugins: Vec<PluginDescriptor>,

    pub output: OutputOptions,

    pub resolve: ResolveOptions,

    /// Source-map strategy (e.g. "source-map"); absent in production.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationOptions>,

    /// Present iff mode is development.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,
}

/// Module-transformation section of the final configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<Rule>,
}

/// Module-resolution section of the final configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Symbolic import prefix to filesystem path.
    #[serde(default)]
    pub alias: IndexMap<String, PathBuf>,
}

/// Output-optimization section of the final configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_chunks: Option<SplitChunks>,
}

impl BundlerConfig {
    /// Convert to `serde_json::Value`, the shape the external engine reads.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Parse a previously emitted configuration.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
