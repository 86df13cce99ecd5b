//! Project-manifest discovery.
//!
//! Projects can parameterize the standard preset through a `rigup.toml` file
//! (or a `rigup` field in `package.json`). The manifest only carries the
//! handful of knobs that differ per project; everything else comes from the
//! preset.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::assembler::ConfigAssembler;
use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result};
use crate::output::OutputOptions;

/// Per-project overrides applied on top of the standard preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Replacement module list for the "index" entry. Arrays replace, never
    /// merge.
    #[serde(default)]
    pub entry: Vec<String>,

    /// Replacement output directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Dev server overrides, development mode only.
    #[serde(default)]
    pub dev: Option<DevOverrides>,

    /// Additional resolution aliases, merged over the preset's.
    #[serde(default)]
    pub aliases: IndexMap<String, PathBuf>,
}

/// Dev-server fields a manifest may override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevOverrides {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub open: Option<bool>,

    /// Directory of static assets the dev server should serve.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl ProjectManifest {
    /// Fold the overrides into an assembled configuration.
    pub fn apply(&self, mut assembler: ConfigAssembler) -> ConfigAssembler {
        if !self.entry.is_empty() {
            assembler = assembler.set_entry("index", self.entry.clone());
        }

        if let Some(dir) = &self.output_dir {
            assembler = assembler.output(OutputOptions::new(dir, "[name].js"));
        }

        if let Some(dev) = &self.dev {
            if assembler.mode().is_development() {
                let mut options = DevServerOptions::default();
                if let Some(host) = &dev.host {
                    options.host = host.clone();
                }
                if let Some(port) = dev.port {
                    options.port = port;
                }
                if let Some(open) = dev.open {
                    options.open = open;
                }
                if let Some(dir) = &dev.static_dir {
                    options = options.static_dir(dir.clone());
                }
                assembler = assembler.dev_server(options);
            }
        }

        for (prefix, path) in &self.aliases {
            assembler = assembler.alias(prefix.clone(), path.clone());
        }

        assembler
    }
}

/// File-based manifest discovery.
///
/// # Example
///
/// ```no_run
/// use rigup_config::ManifestDiscovery;
///
/// let manifest = ManifestDiscovery::new(".").load_or_default().unwrap();
/// ```
pub struct ManifestDiscovery {
    root: PathBuf,
}

impl ManifestDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a manifest in the root directory.
    ///
    /// Searches in this order:
    /// 1. `rigup.toml`
    /// 2. `package.json` with a `rigup` field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("rigup.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("rigup").is_some() && !parsed["rigup"].is_null() {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the discovered manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no manifest file exists.
    pub fn load(&self) -> Result<ProjectManifest> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        debug!(path = %path.display(), "loading project manifest");
        self.load_from(&path)
    }

    /// Load the manifest, falling back to defaults when there is none.
    ///
    /// Only a missing manifest falls back; a manifest that exists but does
    /// not parse is malformed caller input and is surfaced immediately.
    pub fn load_or_default(&self) -> Result<ProjectManifest> {
        match self.load() {
            Ok(manifest) => Ok(manifest),
            Err(ConfigError::NotFound) => Ok(ProjectManifest::default()),
            Err(err) => Err(err),
        }
    }

    fn load_from(&self, path: &Path) -> Result<ProjectManifest> {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "rigup.toml".to_string(),
            hint: Some(format!("invalid TOML syntax: {}", e)),
        })
    }

    fn load_from_package_json(&self, path: &Path) -> Result<ProjectManifest> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("invalid JSON: {}", e)),
            })?;

        let rigup_value = parsed
            .get("rigup")
            .filter(|v| !v.is_null())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "rigup".to_string(),
                hint: Some("add a 'rigup' field to your package.json".to_string()),
            })?;

        serde_json::from_value(rigup_value.clone()).map_err(|e| ConfigError::InvalidValue {
            field: "rigup".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_manifest() {
        let dir = TempDir::new().unwrap();
        assert!(ManifestDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_discovers_toml_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rigup.toml");
        fs::write(&path, "entry = [\"./src/main.js\"]\n").unwrap();
        assert_eq!(ManifestDiscovery::new(dir.path()).find().unwrap(), path);
    }

    #[test]
    fn load_returns_not_found_when_no_manifest() {
        let dir = TempDir::new().unwrap();
        let result = ManifestDiscovery::new(dir.path()).load();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn load_parses_toml_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("rigup.toml"),
            r#"
entry = ["./src/main.js"]
output_dir = "build"

[dev]
port = 3000

[aliases]
"@components" = "src/components"
"#,
        )
        .unwrap();

        let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(manifest.entry, vec!["./src/main.js"]);
        assert_eq!(manifest.output_dir, Some(PathBuf::from("build")));
        assert_eq!(manifest.dev.unwrap().port, Some(3000));
        assert_eq!(
            manifest.aliases["@components"],
            PathBuf::from("src/components")
        );
    }

    #[test]
    fn load_from_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
                "name": "test",
                "rigup": { "entry": ["./src/main.js"] }
            }"#,
        )
        .unwrap();

        let manifest = ManifestDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(manifest.entry, vec!["./src/main.js"]);
    }

    #[test]
    fn load_or_default_falls_back_only_when_missing() {
        let dir = TempDir::new().unwrap();
        let manifest = ManifestDiscovery::new(dir.path())
            .load_or_default()
            .unwrap();
        assert!(manifest.entry.is_empty());
    }

    #[test]
    fn malformed_toml_is_an_invalid_value() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rigup.toml"), "entry = [").unwrap();
        let result = ManifestDiscovery::new(dir.path()).load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn load_or_default_propagates_malformed_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rigup.toml"), "entry = [").unwrap();
        let result = ManifestDiscovery::new(dir.path()).load_or_default();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
