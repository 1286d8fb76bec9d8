//! Tracing subscriber setup for the keysheet binaries.

use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber. `RUST_LOG` overrides the default
/// `info` filter. Calling this more than once is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
