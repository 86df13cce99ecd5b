//! rigup CLI entry point: argument parsing, logging setup, command dispatch.

use clap::Parser;
use miette::Result;
use rigup_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Emit(emit_args) => commands::emit_execute(emit_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
