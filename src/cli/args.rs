//! Command-line argument definitions.
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Organize applications into named environments and launch them together",
    long_about = None
)]
pub struct AppdeckArgs {
    /// Path to config.json (overrides APPDECK_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
}
