//! Declarative, mode-conditioned bundler configuration assembly.
//!
//! `rigup-config` builds a complete, serializable bundler configuration from
//! declarative inputs: named entry points, transformation rules keyed by
//! file-extension patterns, output-stage plugin descriptors, resolution
//! aliases, and dev-server parameters. The whole assembly is conditioned on a
//! single [`BuildMode`] chosen once at startup; the emitted [`BundlerConfig`]
//! contains no residual conditionals and is handed, immutable, to an external
//! bundler runtime.
//!
//! The crate does not bundle, transpile, or serve anything itself.

pub mod assembler;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod output;
pub mod plugin;
pub mod preset;
pub mod rule;
pub mod validation;

// Re-export main types
pub use assembler::ConfigAssembler;
pub use config::{BundlerConfig, ModuleOptions, OptimizationOptions, ResolveOptions};
pub use dev::DevServerOptions;
pub use error::{ConfigError, Result};
pub use mode::BuildMode;
pub use output::{CacheGroup, OutputOptions, SplitChunks};
pub use plugin::PluginDescriptor;
pub use rule::{LoaderStep, MatchPattern, Rule};

// Re-export discovery and validation
pub use discovery::{DevOverrides, ManifestDiscovery, ProjectManifest};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
