//! Telemetry initialization.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` for developer logs.
///
/// Logs go to stderr so the interactive menus on stdout stay clean. The
/// default filter is `warn`; set `RUST_LOG` to raise verbosity.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
