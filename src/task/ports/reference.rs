//! Reference catalog port used for location checks and suggestions.

use crate::task::domain::ReferenceRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reference catalog operations.
pub type ReferenceResult<T> = Result<T, ReferenceError>;

/// Read-only source of reference records.
#[async_trait]
pub trait ReferenceCatalog: Send + Sync {
    /// Fetches the complete reference collection.
    ///
    /// Implementations must not cache: every call reflects the catalog at
    /// the time of the call.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError`] when the catalog cannot be reached, answers
    /// with a non-success status, or sends a payload that cannot be decoded.
    async fn fetch_records(&self) -> ReferenceResult<Vec<ReferenceRecord>>;
}

/// Errors returned by reference catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum ReferenceError {
    /// The catalog answered with a non-success status code.
    #[error("reference catalog returned status {0}")]
    Status(u16),

    /// The catalog could not be reached.
    #[error("reference catalog unreachable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The response body was not a list of reference records.
    #[error("reference catalog payload could not be decoded: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReferenceError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a payload decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
