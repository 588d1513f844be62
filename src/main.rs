//! Entry point for appdeck.
use std::{fs, process::ExitCode};

use anyhow::Result;
use appdeck::{
    cli::{self, AppdeckArgs},
    registry::EnvironmentRegistry,
    store::ConfigStore,
    support::telemetry,
    ui,
};
use clap::Parser;
use tracing::warn;

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("appdeck: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn bootstrap() -> Result<()> {
    telemetry::init_tracing()?;
    let args = AppdeckArgs::parse();
    let config_path = cli::resolve_config_path(args.config_override)?;

    if let Some(parent) = config_path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            // Degrade to an in-memory session; each failed save is reported
            // as it happens.
            warn!(
                dir = %parent.display(),
                reason = %err,
                "could not create config directory; changes will not be persisted"
            );
        }
    }

    let registry = EnvironmentRegistry::new(ConfigStore::new(config_path));
    ui::run(&registry)
}
