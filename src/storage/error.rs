//! Persistence error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read.
    #[error("failed to read store: {0}")]
    ReadFailed(String),

    /// The backing file could not be written.
    #[error("failed to write store: {0}")]
    WriteFailed(String),

    /// The backing file exists but is not a valid store document.
    #[error("store is corrupt: {0}")]
    Corrupt(String),

    /// The store is not available at all.
    #[error("store is unavailable")]
    Unavailable,
}

impl StorageError {
    /// Returns true if the stored data itself is bad, as opposed to the medium.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt(_))
    }
}
