//! Key-value storage port backing task persistence.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string-keyed storage.
///
/// Calls are synchronous; a write is complete when `set` returns.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the key is not accepted by the backend
    /// or the write fails.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by key-value storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be represented by the backend.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// A slot value could not be encoded before writing.
    #[error("failed to encode slot '{key}': {source}")]
    Encode {
        /// Slot being written.
        key: String,
        /// Underlying serializer error.
        source: Arc<serde_json::Error>,
    },

    /// Backend-layer failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
