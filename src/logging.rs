//! Diagnostic tracing for the CLI.
//!
//! Resolved suffixes and error reports are printed directly; tracing only
//! carries developer diagnostics and is silent unless `RUST_LOG` asks for it.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in compact format.
///
/// ```bash
/// RUST_LOG=ordinal=trace ordinal suffix 21 112
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
