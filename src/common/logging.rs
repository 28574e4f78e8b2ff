//! Logging and tracing configuration
//!
//! Report lines go to stdout; diagnostics (cache hits, script invocations,
//! failure output) go through `tracing` so they can be filtered away.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the CLI (stderr logging)
///
/// The level passed on the command line sets the default filter; the
/// `RUST_LOG` environment variable wins when set.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sbit={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
