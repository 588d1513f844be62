use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while reading or writing the persisted store file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the store file.
    #[error("failed to read store file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The store file exists but does not contain valid JSON.
    #[error("failed to parse store file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Failed to serialize the in-memory store.
    #[error("failed to serialize store: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    /// Failed to write the store file or rename the temp file over it.
    #[error("failed to write store file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to create the config directory.
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors surfaced by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// User input failed validation; no state was changed.
    #[error("invalid `{field}`: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
    /// No environment matches the given name (case-insensitive).
    #[error("environment `{name}` was not found")]
    EnvironmentNotFound { name: String },
    /// No app matches the given name within the environment.
    #[error("app `{app}` was not found in environment `{environment}`")]
    AppNotFound { environment: String, app: String },
    /// The underlying store could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RegistryError {
    /// Helper to build an `InvalidInput` error for a named field.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
