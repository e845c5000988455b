// ABOUTME: Tracing subscriber setup for the CLI
// ABOUTME: Honors RUST_LOG and writes to stderr so stdout stays machine-readable

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Defaults to `warn` when `RUST_LOG`
/// is unset or invalid.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
