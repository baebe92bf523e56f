//! Diagnostics via `tracing`, written to stderr so command output stays clean.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `WH_LOG=debug`.
pub const LOG_ENV: &str = "WH_LOG";

/// Install the global subscriber. `verbose` raises the default level to DEBUG;
/// an explicit `WH_LOG` always wins.
pub fn enable_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    // a subscriber may already be installed (tests run several commands in one process)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
