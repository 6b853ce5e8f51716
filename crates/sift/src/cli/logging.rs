//! Diagnostic logging setup.
//!
//! Logs go to stderr so that `--json` output on stdout stays machine-readable.
//! `RUST_LOG` takes precedence over `-v`.

use std::io;

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default log level.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    // A subscriber may already be installed when embedded in tests.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
