//! Pluggable validation strategies for finalized configurations.
//!
//! Separates schema validation (usable anywhere) from filesystem validation
//! (CLI use, where entry modules and templates are expected on disk).

use std::path::{Path, PathBuf};

use crate::config::BundlerConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable validation strategies.
pub trait ConfigValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()>;
}

/// Schema-only validation, no filesystem checks.
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, modules) in &config.entry {
            if modules.iter().any(|m| m.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{}' contains an empty module path", name),
                    hint: Some("remove empty strings from the entry list".to_string()),
                });
            }
        }

        if config.output.filename.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output filename pattern is empty".to_string(),
                hint: Some("use a pattern such as \"[name].js\"".to_string()),
            });
        }

        for rule in &config.module.rules {
            if rule.steps.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "rule matching '{}' has no transformation steps",
                        rule.test.as_regex_str()
                    ),
                    hint: None,
                });
            }
            for step in &rule.steps {
                if step.loader.trim().is_empty() {
                    return Err(ConfigError::SchemaValidation {
                        message: format!("step '{}' has no loader reference", step.name),
                        hint: None,
                    });
                }
            }
        }

        for plugin in &config.plugins {
            if plugin.plugin.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("plugin '{}' has no constructor reference", plugin.name),
                    hint: None,
                });
            }
        }

        // exactly one devServer variant may be active, and only in development
        if config.dev_server.is_some() && config.mode.is_production() {
            return Err(ConfigError::SchemaValidation {
                message: "devServer present in a production configuration".to_string(),
                hint: Some("dev server settings only apply in development mode".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator for CLI use.
///
/// On top of schema validation, checks that entry modules and the HTML
/// template referenced by the html plugin exist under the project root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for modules in config.entry.values() {
            for module in modules {
                // bare specifiers (e.g. "@babel/polyfill") resolve from
                // node_modules, not the project tree
                if !module.starts_with("./") && !module.starts_with("../") {
                    continue;
                }
                let path = self.root.join(module);
                if !path.exists() {
                    return Err(ConfigError::EntryNotFound { path });
                }
            }
        }

        for plugin in &config.plugins {
            let Some(template) = plugin.options.get("template").and_then(|t| t.as_str()) else {
                continue;
            };
            let path = self.root.join(template);
            if !path.exists() {
                return Err(ConfigError::TemplateNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation.
pub fn validate_schema(config: &BundlerConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation.
pub fn validate_fs(config: &BundlerConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
