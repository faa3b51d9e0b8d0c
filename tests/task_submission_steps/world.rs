//! Shared world state for task submission BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryKeyValueStore, InMemoryReferenceCatalog},
    domain::Task,
    services::{SubmitOutcome, SuggestionService, TaskPersistence, TaskStore, TaskTracker},
    validation::{AssigneeRule, ValidationPipeline},
};

/// Clock pinned to 2026-10-18T12:00:00Z for every scenario.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioClock;

impl ScenarioClock {
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
            .single()
            .expect("valid scenario timestamp")
    }
}

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        Self::now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::now()
    }
}

/// Tracker type used by the BDD world.
pub type ScenarioTracker =
    TaskTracker<InMemoryKeyValueStore, InMemoryReferenceCatalog, ScenarioClock>;

/// Scenario world for task submission behaviour tests.
pub struct SubmissionWorld {
    pub catalog: InMemoryReferenceCatalog,
    pub storage: InMemoryKeyValueStore,
    pub tracker: Option<ScenarioTracker>,
    pub last_submission: Option<SubmitOutcome>,
    pub last_completion: Option<Option<Task>>,
}

impl SubmissionWorld {
    /// Creates a world with an empty catalog and no tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: InMemoryReferenceCatalog::new(),
            storage: InMemoryKeyValueStore::new(),
            tracker: None,
            last_submission: None,
            last_completion: None,
        }
    }

    /// Builds a tracker over the world's catalog and storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the default assignee rule fails to compile.
    pub fn build_tracker(&self) -> Result<ScenarioTracker, eyre::Report> {
        let catalog = Arc::new(self.catalog.clone());
        let pipeline = ValidationPipeline::new(
            Arc::clone(&catalog),
            Arc::new(ScenarioClock),
            AssigneeRule::default_domain()?,
        );
        Ok(TaskTracker::new(
            pipeline,
            SuggestionService::new(catalog, Duration::ZERO),
            TaskStore::new(TaskPersistence::new(Arc::new(self.storage.clone()))),
        ))
    }

    /// Returns the scenario's tracker.
    ///
    /// # Errors
    ///
    /// Returns an error if no tracker has been built yet.
    pub fn tracker(&self) -> Result<&ScenarioTracker, eyre::Report> {
        self.tracker
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing tracker in scenario world"))
    }
}

impl Default for SubmissionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SubmissionWorld {
    SubmissionWorld::default()
}

/// Splits a comma-separated scenario list, treating an empty string as no
/// items.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
