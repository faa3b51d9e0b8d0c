//! Shared test helpers for in-memory tracker integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use taskboard::task::{
    adapters::memory::{InMemoryKeyValueStore, InMemoryReferenceCatalog},
    domain::{TaskForm, TaskSnapshot},
    ports::TaskStoreObserver,
    services::{SuggestionService, TaskPersistence, TaskStore, TaskTracker},
    validation::{AssigneeRule, ValidationPipeline},
};

/// Tracker type wired to in-memory adapters.
pub type TestTracker = TaskTracker<InMemoryKeyValueStore, InMemoryReferenceCatalog, FixedClock>;

/// Clock pinned to 2026-10-18T12:00:00Z.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
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

/// Adapters shared between a tracker and the test driving it.
#[derive(Debug, Clone)]
pub struct Harness {
    pub storage: InMemoryKeyValueStore,
    pub catalog: InMemoryReferenceCatalog,
}

impl Harness {
    /// Builds a new tracker over this harness's adapters.
    pub fn tracker(&self) -> TestTracker {
        let catalog = Arc::new(self.catalog.clone());
        let pipeline = ValidationPipeline::new(
            Arc::clone(&catalog),
            Arc::new(FixedClock::default()),
            AssigneeRule::default_domain().expect("default assignee rule"),
        );
        let suggestions = SuggestionService::new(catalog, Duration::ZERO);
        let store = TaskStore::new(TaskPersistence::new(Arc::new(self.storage.clone())));
        TaskTracker::new(pipeline, suggestions, store)
    }
}

/// Provides fresh storage and a catalog listing a few cities.
#[fixture]
pub fn harness() -> Harness {
    Harness {
        storage: InMemoryKeyValueStore::new(),
        catalog: InMemoryReferenceCatalog::with_titles(["Mumbai", "Pune", "Bengaluru"]),
    }
}

/// Builds a form that passes validation, due on `due_date`.
pub fn form_due(details: &str, due_date: &str) -> TaskForm {
    TaskForm::new(details, "alice@dream11.com", due_date, "Mumbai")
}

/// Observer that keeps every snapshot it receives.
#[derive(Debug, Default)]
pub struct SnapshotLog {
    snapshots: Mutex<Vec<TaskSnapshot>>,
}

impl SnapshotLog {
    /// Returns the snapshots received so far.
    pub fn snapshots(&self) -> Vec<TaskSnapshot> {
        self.snapshots.lock().expect("snapshot log lock").clone()
    }
}

impl TaskStoreObserver for SnapshotLog {
    fn tasks_changed(&self, snapshot: &TaskSnapshot) {
        self.snapshots
            .lock()
            .expect("snapshot log lock")
            .push(snapshot.clone());
    }
}
