//! Unit tests for the task lifecycle engine.


use crate::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{PersistedTaskData, Task},
    ports::{KeyValueStore, StorageError, StorageResult},
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock reading 2026-10-18T12:00:00Z.
    pub fn noon() -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a stored task with the given details and due date.
pub(super) fn task(details: &str, due_date: &str) -> Task {
    Task::from_persisted(PersistedTaskData {
        task_details: details.to_owned(),
        assignee: "alice@dream11.com".to_owned(),
        due_date: due_date.to_owned(),
        location: "Mumbai".to_owned(),
    })
}

/// In-memory store that can be told to refuse writes to one slot.
#[derive(Debug)]
pub(super) struct RejectingStore {
    pub inner: InMemoryKeyValueStore,
    rejected_key: &'static str,
    rejecting: AtomicBool,
}

impl RejectingStore {
    /// Wraps `inner`; writes to `rejected_key` succeed until [`Self::reject`].
    pub fn new(inner: InMemoryKeyValueStore, rejected_key: &'static str) -> Self {
        Self {
            inner,
            rejected_key,
            rejecting: AtomicBool::new(false),
        }
    }

    /// Starts refusing writes to the rejected key.
    pub fn reject(&self) {
        self.rejecting.store(true, Ordering::SeqCst);
    }
}

impl KeyValueStore for RejectingStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if key == self.rejected_key && self.rejecting.load(Ordering::SeqCst) {
            return Err(StorageError::backend(std::io::Error::other("slot is read-only")));
        }
        self.inner.set(key, value)
    }
}
