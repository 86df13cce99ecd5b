//! Logging infrastructure for the rigup CLI.
//!
//! Sets up the `tracing` subscriber once at startup. Log output goes to
//! stderr so that emitted JSON on stdout stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// The logging level is determined in this order:
/// 1. `--verbose`: debug level for rigup crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable
/// 4. default: info level for rigup crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("rigup=debug,rigup_config=debug,rigup_cli=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rigup=info,rigup_config=info,rigup_cli=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(!no_color)
                .with_writer(std::io::stderr),
        )
        .init();
}
