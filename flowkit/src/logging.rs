//! Development-time tracing for debugging the toolkit.
//!
//! Dev diagnostics via `RUST_LOG`, output to stderr. Not persisted and not
//! part of command output, which goes to stdout only.

use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=flowkit=debug cargo run -- reduce
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
