//! Manifest overrides layered onto the standard preset.

use std::fs;
use std::path::{Path, PathBuf};

use rigup_config::{preset, BuildMode, ManifestDiscovery};
use tempfile::TempDir;

fn load_manifest(toml: &str) -> rigup_config::ProjectManifest {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("rigup.toml"), toml).expect("write manifest");
    ManifestDiscovery::new(dir.path()).load().expect("load")
}

#[test]
fn entry_override_replaces_entire_list() {
    let manifest = load_manifest("entry = [\"./src/main.js\"]\n");

    let config = manifest
        .apply(preset::web_app(BuildMode::Development, Path::new("/project")))
        .finalize()
        .expect("finalize");

    // arrays replace: polyfill from the dev preset is gone
    assert_eq!(config.entry["index"], vec!["./src/main.js"]);
}

#[test]
fn unset_fields_preserve_preset_values() {
    let manifest = load_manifest("entry = [\"./src/main.js\"]\n");

    let config = manifest
        .apply(preset::web_app(BuildMode::Production, Path::new("/project")))
        .finalize()
        .expect("finalize");

    assert_eq!(config.output.path, Path::new("/project/dist"));
    assert_eq!(config.resolve.alias["@"], Path::new("/project/src"));
}

#[test]
fn dev_overrides_only_apply_in_development() {
    let manifest = load_manifest(
        r#"
[dev]
host = "0.0.0.0"
port = 3000
"#,
    );

    let dev_config = manifest
        .apply(preset::web_app(BuildMode::Development, Path::new("/project")))
        .finalize()
        .expect("finalize");
    let dev_server = dev_config.dev_server.expect("devServer");
    assert_eq!(dev_server.host, "0.0.0.0");
    assert_eq!(dev_server.port, 3000);

    let prod_config = manifest
        .apply(preset::web_app(BuildMode::Production, Path::new("/project")))
        .finalize()
        .expect("finalize");
    assert!(prod_config.dev_server.is_none());
}

#[test]
fn dev_static_dir_override_is_served_in_development() {
    let manifest = load_manifest(
        r#"
[dev]
static_dir = "public"
"#,
    );

    let config = manifest
        .apply(preset::web_app(BuildMode::Development, Path::new("/project")))
        .finalize()
        .expect("finalize");

    let dev_server = config.dev_server.expect("devServer");
    assert_eq!(dev_server.static_dir, Some(PathBuf::from("public")));
    // untouched fields keep their defaults
    assert_eq!(dev_server.host, "localhost");
    assert_eq!(dev_server.port, 8080);
}

#[test]
fn aliases_merge_over_preset_aliases() {
    let manifest = load_manifest(
        r#"
[aliases]
"@components" = "src/components"
"#,
    );

    let config = manifest
        .apply(preset::web_app(BuildMode::Development, Path::new("/project")))
        .finalize()
        .expect("finalize");

    assert_eq!(config.resolve.alias["@"], Path::new("/project/src"));
    assert_eq!(
        config.resolve.alias["@components"],
        PathBuf::from("src/components")
    );
}

#[test]
fn output_dir_override_keeps_filename_pattern() {
    let manifest = load_manifest("output_dir = \"build\"\n");

    let config = manifest
        .apply(preset::web_app(BuildMode::Production, Path::new("/project")))
        .finalize()
        .expect("finalize");

    assert_eq!(config.output.path, Path::new("build"));
    assert_eq!(config.output.filename, "[name].js");
}
