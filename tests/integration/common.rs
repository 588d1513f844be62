use std::{fs, path::PathBuf};

use appdeck::{registry::EnvironmentRegistry, store::ConfigStore};
use tempfile::TempDir;

/// Registry backed by a store file under the temp directory, mirroring the
/// default `config/config.json` layout.
pub fn registry_in(temp: &TempDir) -> EnvironmentRegistry {
    EnvironmentRegistry::new(ConfigStore::new(config_path_in(temp)))
}

pub fn config_path_in(temp: &TempDir) -> PathBuf {
    temp.path().join("config").join("config.json")
}

/// Create a file that passes the registry's route check (and, on Unix, the
/// executable bit the discovery scan looks for).
pub fn fake_executable(temp: &TempDir, name: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, b"#!/bin/sh\n").expect("can write fake executable");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("can mark file executable");
    }

    path
}
