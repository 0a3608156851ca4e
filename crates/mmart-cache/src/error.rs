//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The stored value under `key` could not be decoded.
    #[error("Corrupt value under {key}: {source}")]
    DecodeError {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}

impl CacheError {
    /// Whether the error means the slot holds data that can't be read back.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, CacheError::DecodeError { .. })
    }
}
