//! Output descriptor and chunk-splitting options.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Where the engine writes emitted bundles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory.
    pub path: PathBuf,

    /// Filename pattern for emitted chunks (e.g. "[name].js").
    pub filename: String,
}

impl OutputOptions {
    pub fn new(path: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
        }
    }
}

/// Shared-chunk extraction settings, production only in the standard preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    #[serde(default)]
    pub cache_groups: IndexMap<String, CacheGroup>,
}

/// One named cache group inside [`SplitChunks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroup {
    /// Which chunk kinds participate ("initial", "async", "all").
    pub chunks: String,

    /// Name of the extracted chunk.
    pub name: String,

    /// Minimum number of chunks that must share a module before extraction.
    #[serde(default = "default_min_chunks")]
    pub min_chunks: u32,

    #[serde(default = "default_max_initial_requests")]
    pub max_initial_requests: u32,

    /// Minimum module size in bytes before extraction.
    #[serde(default)]
    pub min_size: u64,

    #[serde(default)]
    pub reuse_existing_chunk: bool,
}

fn default_min_chunks() -> u32 {
    2
}

fn default_max_initial_requests() -> u32 {
    3
}
