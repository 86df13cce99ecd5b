//! Command-line interface definition.
//!
//! - `rigup emit` - assemble the configuration and write it as JSON
//! - `rigup check` - assemble and validate without emitting

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rigup_config::BuildMode;

/// rigup - declarative bundler configuration assembly
#[derive(Parser, Debug)]
#[command(
    name = "rigup",
    version,
    about = "Assemble mode-conditioned bundler configuration",
    long_about = "rigup assembles a complete bundler configuration object from the\n\
                  standard web-app preset plus per-project overrides (rigup.toml),\n\
                  conditioned on a production/development build mode, and emits it\n\
                  as JSON for an external bundler runtime."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the configuration and emit it as JSON
    Emit(EmitArgs),
    /// Assemble the configuration and validate it
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Build mode (production or development); defaults to NODE_ENV
    #[arg(long)]
    pub mode: Option<BuildMode>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Build mode (production or development); defaults to NODE_ENV
    #[arg(long)]
    pub mode: Option<BuildMode>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Also check that entry modules and templates exist on disk
    #[arg(long)]
    pub fs: bool,
}
