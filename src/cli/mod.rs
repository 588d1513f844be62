//! CLI entrypoint module structure and config-path resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

pub mod args;

pub use args::AppdeckArgs;

const DEFAULT_CONFIG: &str = "config/config.json";
const CONFIG_ENV: &str = "APPDECK_CONFIG";

/// Resolve the store path in the order: CLI override → env var → default.
///
/// Relative paths are joined to the current directory, so the default lands
/// at `./config/config.json`.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = override_path
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}
