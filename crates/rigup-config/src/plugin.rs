//! Output-stage plugin descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named reference to an external output-stage plugin and its options.
///
/// The assembler never instantiates plugins; it records which external
/// constructor the engine should invoke and with what options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Registry name; registering a duplicate name overwrites the earlier
    /// descriptor in place.
    pub name: String,

    /// External plugin constructor the engine resolves
    /// (e.g. "html-webpack-plugin").
    pub plugin: String,

    /// Constructor options forwarded verbatim.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>, plugin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plugin: plugin.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}
