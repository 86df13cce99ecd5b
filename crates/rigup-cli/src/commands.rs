//! Command execution: one-shot assembly, then emit or validate.

use std::fs;

use rigup_config::{preset, validate_fs, validate_schema, BuildMode, BundlerConfig, ManifestDiscovery};
use tracing::{debug, info};

use crate::cli::{CheckArgs, EmitArgs};
use crate::error::{CliError, Result};

/// Assemble the configuration for `root`, layering manifest overrides onto
/// the standard preset.
fn assemble(mode: BuildMode, root: &std::path::Path) -> Result<BundlerConfig> {
    let manifest = ManifestDiscovery::new(root).load_or_default()?;
    debug!(mode = %mode, root = %root.display(), "assembling configuration");
    let config = manifest.apply(preset::web_app(mode, root)).finalize()?;
    Ok(config)
}

pub fn emit_execute(args: EmitArgs) -> Result<()> {
    let mode = args.mode.unwrap_or_else(BuildMode::from_env);
    let config = assemble(mode, &args.root)?;

    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };

    match args.out {
        Some(path) => {
            fs::write(&path, format!("{json}\n")).map_err(|e| CliError::Write(path.clone(), e))?;
            info!(path = %path.display(), mode = %mode, "wrote bundler configuration");
        }
        None => println!("{json}"),
    }

    Ok(())
}

pub fn check_execute(args: CheckArgs) -> Result<()> {
    let mode = args.mode.unwrap_or_else(BuildMode::from_env);
    let config = assemble(mode, &args.root)?;

    if args.fs {
        validate_fs(&config, &args.root)?;
    } else {
        validate_schema(&config)?;
    }

    println!(
        "configuration ok: mode {}, {} rules, {} plugins",
        config.mode,
        config.module.rules.len(),
        config.plugins.len()
    );

    Ok(())
}
