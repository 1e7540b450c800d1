//! Development-time tracing for debugging prsafe.
//!
//! Diagnostics go to stderr via `RUST_LOG` so stdout stays reserved for the
//! single success line (the pull request URL).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset. Output: stderr, compact.
///
/// # Example
/// ```bash
/// RUST_LOG=prsafe=debug prsafe create --title "..." < body.md
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
