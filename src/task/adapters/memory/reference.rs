//! In-memory reference catalog.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::task::{
    domain::ReferenceRecord,
    ports::{ReferenceCatalog, ReferenceError, ReferenceResult},
};

/// Reference catalog serving a fixed record set.
///
/// The catalog can be switched into a failing mode and given an artificial
/// latency, and it counts fetches so tests can check that nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    records: Vec<ReferenceRecord>,
    failure: Option<ReferenceError>,
    latency: Duration,
    fetches: usize,
}

impl InMemoryReferenceCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding one record per title.
    #[must_use]
    pub fn with_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let records = titles.into_iter().map(ReferenceRecord::new).collect();
        Self {
            state: Arc::new(RwLock::new(InMemoryCatalogState {
                records,
                ..InMemoryCatalogState::default()
            })),
        }
    }

    /// Replaces the record set.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::Transport`] if the lock is poisoned.
    pub fn set_records(&self, records: Vec<ReferenceRecord>) -> ReferenceResult<()> {
        self.write_state()?.records = records;
        Ok(())
    }

    /// Makes every subsequent fetch fail with `error`.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::Transport`] if the lock is poisoned.
    pub fn fail_with(&self, error: ReferenceError) -> ReferenceResult<()> {
        self.write_state()?.failure = Some(error);
        Ok(())
    }

    /// Restores successful fetches.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::Transport`] if the lock is poisoned.
    pub fn recover(&self) -> ReferenceResult<()> {
        self.write_state()?.failure = None;
        Ok(())
    }

    /// Delays every subsequent fetch by `latency`.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::Transport`] if the lock is poisoned.
    pub fn set_latency(&self, latency: Duration) -> ReferenceResult<()> {
        self.write_state()?.latency = latency;
        Ok(())
    }

    /// Number of fetches served so far, failed ones included.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::Transport`] if the lock is poisoned.
    pub fn fetch_count(&self) -> ReferenceResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.fetches)
    }

    fn write_state(
        &self,
    ) -> ReferenceResult<std::sync::RwLockWriteGuard<'_, InMemoryCatalogState>> {
        self.state.write().map_err(poisoned)
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> ReferenceError {
    ReferenceError::transport(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ReferenceCatalog for InMemoryReferenceCatalog {
    async fn fetch_records(&self) -> ReferenceResult<Vec<ReferenceRecord>> {
        let (latency, result) = {
            let mut state = self.write_state()?;
            state.fetches += 1;
            let result = state
                .failure
                .clone()
                .map_or_else(|| Ok(state.records.clone()), Err);
            (state.latency, result)
        };

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        result
    }
}
