//! Error types for the persistent key-value store
//!
//! Store errors only travel as far as the persistence adapter, which logs
//! them and carries on. They are typed so that adapters and tests can tell
//! an unavailable store from a damaged document.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("storage document {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode storage document: {0}")]
    Encode(#[from] serde_json::Error),

    /// The store refuses the operation (quota reached, disabled, ...).
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
