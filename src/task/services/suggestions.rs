//! Location suggestions drawn from the reference catalog.

use crate::task::{
    domain::{ReferenceRecord, normalize_title},
    ports::{ReferenceCatalog, ReferenceError},
};
use std::iter::FusedIterator;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// Titles containing the typed text, produced on demand.
///
/// The list is finite and single-pass: once consumed it cannot be replayed.
#[derive(Debug)]
pub struct Suggestions {
    records: std::vec::IntoIter<ReferenceRecord>,
    needle: String,
}

impl Suggestions {
    fn new(records: Vec<ReferenceRecord>, input: &str) -> Self {
        Self {
            records: records.into_iter(),
            needle: normalize_title(input),
        }
    }
}

impl Iterator for Suggestions {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        self.records
            .find(|record| record.title_contains_normalized(needle))
            .map(ReferenceRecord::into_title)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

impl FusedIterator for Suggestions {}

/// Result of one suggestion request.
#[derive(Debug)]
pub enum SuggestionOutcome {
    /// The input was empty; any shown suggestions should be cleared.
    Cleared,
    /// Matching titles for the input.
    Ready(Suggestions),
    /// The catalog could not be reached; show an error indicator instead of
    /// a list.
    Unavailable(ReferenceError),
    /// A newer request was started; this result must not be applied.
    Superseded,
}

/// Debounced, latest-wins suggestion requests.
///
/// Each request takes a generation number. A request that is no longer the
/// most recent once its debounce delay or its fetch finishes reports
/// [`SuggestionOutcome::Superseded`], so a slow response never replaces the
/// suggestions for newer input.
#[derive(Debug)]
pub struct SuggestionService<R>
where
    R: ReferenceCatalog,
{
    catalog: Arc<R>,
    debounce: Duration,
    latest: AtomicU64,
}

impl<R> SuggestionService<R>
where
    R: ReferenceCatalog,
{
    /// Creates a service that waits `debounce` before fetching.
    #[must_use]
    pub const fn new(catalog: Arc<R>, debounce: Duration) -> Self {
        Self {
            catalog,
            debounce,
            latest: AtomicU64::new(0),
        }
    }

    /// Returns the debounce delay.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Produces suggestions for `input`.
    ///
    /// Empty input clears suggestions without fetching. Otherwise the full
    /// catalog is fetched and titles containing the input, ignoring case and
    /// surrounding whitespace, are offered.
    pub async fn suggest(&self, input: &str) -> SuggestionOutcome {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        if input.is_empty() {
            return SuggestionOutcome::Cleared;
        }

        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
        }
        if !self.is_latest(generation) {
            debug!(generation, "suggestion request superseded before fetch");
            return SuggestionOutcome::Superseded;
        }

        let fetched = self.catalog.fetch_records().await;
        if !self.is_latest(generation) {
            debug!(generation, "suggestion request superseded during fetch");
            return SuggestionOutcome::Superseded;
        }

        match fetched {
            Ok(records) => SuggestionOutcome::Ready(Suggestions::new(records, input)),
            Err(err) => {
                warn!(error = %err, "suggestion fetch failed");
                SuggestionOutcome::Unavailable(err)
            }
        }
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }
}
