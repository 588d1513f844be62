//! Load and save the persisted environment store.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::support::errors::StoreError;

pub mod model;

pub use model::{Application, Environment, Store};

/// Handle to the JSON store file.
///
/// Every mutating operation in the crate re-reads the file, mutates, and
/// rewrites it in full (last-writer-wins; tolerant of external edits between
/// operations).
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store, degrading to an empty in-memory store on failure.
    ///
    /// An absent file is created and persisted as a new empty store. A file
    /// that fails to read or parse is reported and left untouched on disk so
    /// it can be recovered by hand.
    pub fn load(&self) -> Store {
        if !self.path.exists() {
            let store = Store::default();
            if let Err(err) = self.save(&store) {
                warn!(path = %self.path.display(), reason = %err, "could not persist new store; continuing in memory");
            }
            return store;
        }

        match self.try_load() {
            Ok(store) => store,
            Err(err) => {
                warn!(path = %self.path.display(), reason = %err, "could not load store; starting from an empty one");
                Store::default()
            }
        }
    }

    fn try_load(&self) -> Result<Store, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Persist the store as pretty-printed JSON.
    ///
    /// The contents are written to a temp file in the destination directory
    /// and renamed over the target, so a crash mid-write never leaves a
    /// truncated file behind.
    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&parent).map_err(|source| StoreError::CreateDir {
            path: parent.clone(),
            source,
        })?;

        let contents = serde_json::to_string_pretty(store)
            .map_err(|source| StoreError::Serialize { source })?;

        let mut temp = NamedTempFile::new_in(&parent).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        temp.write_all(contents.as_bytes())
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        temp.persist(&self.path).map_err(|err| StoreError::Write {
            path: self.path.clone(),
            source: err.error,
        })?;
        Ok(())
    }
}
