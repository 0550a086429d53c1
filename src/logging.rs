//! Logging setup for `notes_rust`.
//!
//! Diagnostics go to stderr so stdout stays clean for `--json` output.
//! `NT_LOG` overrides the verbosity flags when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Verbosity: `--quiet` wins, then `-v` counts up from warn.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8, quiet: bool) {
    let default = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env("NT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
