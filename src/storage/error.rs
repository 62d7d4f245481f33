use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing the inventory slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse storage file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write storage file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
