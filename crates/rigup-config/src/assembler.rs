//! The configuration assembler.
//!
//! A pure builder: the build mode is fixed at construction, declarations are
//! folded in through consuming methods, and [`ConfigAssembler::finalize`]
//! emits the one immutable [`BundlerConfig`]. There is no shared mutable
//! state and no callback indirection; mode conditioning happens in caller
//! code as ordinary branching on [`BuildMode`].

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::{BundlerConfig, ModuleOptions, OptimizationOptions, ResolveOptions};
use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::output::{OutputOptions, SplitChunks};
use crate::plugin::PluginDescriptor;
use crate::rule::Rule;

/// Builder for a [`BundlerConfig`].
///
/// Registration order is significant and preserved: rules appear in the final
/// configuration in first-registration order, and re-registering a rule name
/// appends steps to the existing pipeline rather than replacing it.
///
/// # Example
///
/// ```
/// use rigup_config::{BuildMode, ConfigAssembler, LoaderStep, MatchPattern, OutputOptions, Rule};
///
/// let config = ConfigAssembler::new(BuildMode::Production)
///     .entry("index", "./src/index.js")
///     .output(OutputOptions::new("dist", "[name].js"))
///     .rule(
///         "compile",
///         Rule::new(MatchPattern::extension("js"))
///             .step(LoaderStep::new("babel", "babel-loader")),
///     )
///     .finalize()
///     .unwrap();
///
/// assert_eq!(config.entry["index"], vec!["./src/index.js"]);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigAssembler {
    mode: BuildMode,
    entries: IndexMap<String, Vec<String>>,
    rules: IndexMap<String, Rule>,
    plugins: IndexMap<String, PluginDescriptor>,
    aliases: IndexMap<String, PathBuf>,
    output: Option<OutputOptions>,
    devtool: Option<String>,
    split_chunks: Option<SplitChunks>,
    dev_server: Option<DevServerOptions>,
}

impl ConfigAssembler {
    pub fn new(mode: BuildMode) -> Self {
        Self {
            mode,
            entries: IndexMap::new(),
            rules: IndexMap::new(),
            plugins: IndexMap::new(),
            aliases: IndexMap::new(),
            output: None,
            devtool: None,
            split_chunks: None,
            dev_server: None,
        }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Append a module to the named entry, creating the entry if needed.
    pub fn entry(mut self, name: impl Into<String>, module: impl Into<String>) -> Self {
        self.entries
            .entry(name.into())
            .or_insert_with(Vec::new)
            .push(module.into());
        self
    }

    /// Replace the named entry's module list wholesale.
    ///
    /// Used by manifest overrides; plain registration should use
    /// [`ConfigAssembler::entry`].
    pub fn set_entry<I, S>(mut self, name: impl Into<String>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(name.into(), modules.into_iter().map(Into::into).collect());
        self
    }

    /// Register a transformation rule under `name`.
    ///
    /// If a rule with the same name exists, the new registration's steps are
    /// appended to the existing pipeline and its path filters are unioned;
    /// the original pattern wins. Steps are never prepended or replaced.
    pub fn rule(mut self, name: impl Into<String>, rule: Rule) -> Self {
        let name = name.into();
        match self.rules.get_mut(&name) {
            Some(existing) => {
                debug!(rule = %name, appended = rule.steps.len(), "merging steps into existing rule");
                existing.merge(rule);
            }
            None => {
                self.rules.insert(name, rule);
            }
        }
        self
    }

    /// Register a plugin descriptor.
    ///
    /// Duplicate names overwrite the earlier descriptor while keeping its
    /// original position in the plugin list.
    pub fn plugin(mut self, descriptor: PluginDescriptor) -> Self {
        if self.plugins.contains_key(&descriptor.name) {
            debug!(plugin = %descriptor.name, "overwriting plugin descriptor");
        }
        self.plugins.insert(descriptor.name.clone(), descriptor);
        self
    }

    /// Map a symbolic import prefix to a filesystem path.
    pub fn alias(mut self, prefix: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.aliases.insert(prefix.into(), path.into());
        self
    }

    pub fn output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the source-map strategy (e.g. "source-map").
    pub fn devtool(mut self, devtool: impl Into<String>) -> Self {
        self.devtool = Some(devtool.into());
        self
    }

    pub fn split_chunks(mut self, split_chunks: SplitChunks) -> Self {
        self.split_chunks = Some(split_chunks);
        self
    }

    pub fn dev_server(mut self, dev_server: DevServerOptions) -> Self {
        self.dev_server = Some(dev_server);
        self
    }

    /// Emit the final configuration object.
    ///
    /// Fatal if no entry module or no output descriptor was registered; this
    /// is a one-shot startup-time assembly with no retry path.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoEntries`] if the entry set is empty,
    /// [`ConfigError::MissingOutput`] if no output was registered.
    pub fn finalize(self) -> Result<BundlerConfig> {
        if self.entries.is_empty() || self.entries.values().all(|modules| modules.is_empty()) {
            return Err(ConfigError::NoEntries);
        }
        let output = self.output.ok_or(ConfigError::MissingOutput)?;

        let optimization = self.split_chunks.map(|split_chunks| OptimizationOptions {
            split_chunks: Some(split_chunks),
        });

        debug!(
            mode = %self.mode,
            rules = self.rules.len(),
            plugins = self.plugins.len(),
            "finalized bundler configuration"
        );

        Ok(BundlerConfig {
            mode: self.mode,
            entry: self.entries,
            module: ModuleOptions {
                rules: self.rules.into_values().collect(),
            },
            plugins: self.plugins.into_values().collect(),
            output,
            resolve: ResolveOptions {
                alias: self.aliases,
            },
            devtool: self.devtool,
            optimization,
            dev_server: self.dev_server,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{LoaderStep, MatchPattern};

    fn base() -> ConfigAssembler {
        ConfigAssembler::new(BuildMode::Development)
            .entry("index", "./src/index.js")
            .output(OutputOptions::new("dist", "[name].js"))
    }

    #[test]
    fn finalize_without_entries_fails() {
        let result = ConfigAssembler::new(BuildMode::Production)
            .output(OutputOptions::new("dist", "[name].js"))
            .finalize();
        assert!(matches!(result, Err(ConfigError::NoEntries)));
    }

    #[test]
    fn finalize_without_output_fails() {
        let result = ConfigAssembler::new(BuildMode::Production)
            .entry("index", "./src/index.js")
            .finalize();
        assert!(matches!(result, Err(ConfigError::MissingOutput)));
    }

    #[test]
    fn empty_entry_lists_count_as_no_entries() {
        let result = base().set_entry("index", Vec::<String>::new()).finalize();
        assert!(matches!(result, Err(ConfigError::NoEntries)));
    }

    #[test]
    fn entry_appends_preserving_order() {
        let config = ConfigAssembler::new(BuildMode::Development)
            .entry("index", "@babel/polyfill")
            .entry("index", "./src/index.js")
            .output(OutputOptions::new("dist", "[name].js"))
            .finalize()
            .unwrap();
        assert_eq!(config.entry["index"], vec!["@babel/polyfill", "./src/index.js"]);
    }

    #[test]
    fn reregistered_rule_appends_steps() {
        let config = base()
            .rule(
                "css",
                Rule::new(MatchPattern::raw(r"\.(sa|sc|c)ss$").unwrap())
                    .step(LoaderStep::new("style-loader", "style-loader")),
            )
            .rule(
                "css",
                Rule::new(MatchPattern::raw(r"\.(sa|sc|c)ss$").unwrap())
                    .step(LoaderStep::new("css", "css-loader"))
                    .step(LoaderStep::new("postcss-loader", "postcss-loader")),
            )
            .finalize()
            .unwrap();

        assert_eq!(config.module.rules.len(), 1);
        let names: Vec<&str> = config.module.rules[0]
            .steps
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["style-loader", "css", "postcss-loader"]);
    }

    #[test]
    fn duplicate_plugin_overwrites_in_place() {
        let config = base()
            .plugin(PluginDescriptor::new("html", "html-webpack-plugin"))
            .plugin(PluginDescriptor::new("clear", "clean-webpack-plugin"))
            .plugin(
                PluginDescriptor::new("html", "html-webpack-plugin")
                    .with_options(serde_json::json!({ "filename": "index.html" })),
            )
            .finalize()
            .unwrap();

        assert_eq!(config.plugins.len(), 2);
        // position of the first registration is kept
        assert_eq!(config.plugins[0].name, "html");
        assert_eq!(
            config.plugins[0].options["filename"],
            serde_json::json!("index.html")
        );
    }

    #[test]
    fn independent_registrations_commute() {
        let a = base()
            .alias("@", "src")
            .devtool("source-map")
            .finalize()
            .unwrap();
        let b = ConfigAssembler::new(BuildMode::Development)
            .devtool("source-map")
            .output(OutputOptions::new("dist", "[name].js"))
            .alias("@", "src")
            .entry("index", "./src/index.js")
            .finalize()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn finalize_is_idempotent_over_identical_inputs() {
        let build = || {
            base()
                .rule(
                    "compile",
                    Rule::new(MatchPattern::extension("js"))
                        .step(LoaderStep::new("babel", "babel-loader")),
                )
                .plugin(PluginDescriptor::new("html", "html-webpack-plugin"))
                .dev_server(DevServerOptions::new("localhost", 8080))
                .finalize()
                .unwrap()
        };
        assert_eq!(
            serde_json::to_value(build()).unwrap(),
            serde_json::to_value(build()).unwrap()
        );
    }
}
