//! Logging setup
//!
//! Progress is reported through `tracing` and written to stderr, so it never
//! mixes with CSV output. `RUST_LOG` takes precedence over the `--log-level`
//! default.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// Falls back to `info` if `default_filter` is not a valid filter directive.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
