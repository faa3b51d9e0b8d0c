//! Facade the presentation layer drives.

use crate::task::{
    domain::{Task, TaskForm, TaskSnapshot},
    ports::{KeyValueStore, ReferenceCatalog, TaskStoreObserver},
    services::{SuggestionOutcome, SuggestionService, TaskStore},
    validation::{ValidationPipeline, ValidationReport},
};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::info;

/// Errors surfaced by the tracker facade.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskTrackerError {
    /// A previous operation panicked while holding the store.
    #[error("task store unavailable: {0}")]
    StorePoisoned(String),
}

/// Result type for tracker operations.
pub type TaskTrackerResult<T> = Result<T, TaskTrackerError>;

/// Task added to the in-progress sequence by a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedTask {
    /// Position in the sorted in-progress sequence right after insertion.
    pub position: usize,
    /// The stored task.
    pub task: Task,
}

/// Result of submitting a form.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Per-field validation results.
    pub report: ValidationReport,
    /// The created task, when the form was accepted.
    pub accepted: Option<AcceptedTask>,
}

/// Validation, storage, and suggestions behind one entry point.
pub struct TaskTracker<K, R, C>
where
    K: KeyValueStore,
    R: ReferenceCatalog,
    C: Clock + Send + Sync,
{
    pipeline: ValidationPipeline<R, C>,
    suggestions: SuggestionService<R>,
    store: Mutex<TaskStore<K>>,
}

impl<K, R, C> TaskTracker<K, R, C>
where
    K: KeyValueStore,
    R: ReferenceCatalog,
    C: Clock + Send + Sync,
{
    /// Creates a tracker from its parts.
    #[must_use]
    pub const fn new(
        pipeline: ValidationPipeline<R, C>,
        suggestions: SuggestionService<R>,
        store: TaskStore<K>,
    ) -> Self {
        Self {
            pipeline,
            suggestions,
            store: Mutex::new(store),
        }
    }

    /// Loads both collections from storage and returns them.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackerError::StorePoisoned`] if the store lock is
    /// poisoned.
    pub fn start(&self) -> TaskTrackerResult<TaskSnapshot> {
        let mut store = self.lock_store()?;
        store.load();
        let snapshot = store.snapshot();
        info!(
            in_progress = snapshot.in_progress.len(),
            completed = snapshot.completed.len(),
            "task tracker started"
        );
        Ok(snapshot)
    }

    /// Registers an observer for every subsequent store change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackerError::StorePoisoned`] if the store lock is
    /// poisoned.
    pub fn subscribe(&self, observer: Arc<dyn TaskStoreObserver>) -> TaskTrackerResult<()> {
        self.lock_store()?.subscribe(observer);
        Ok(())
    }

    /// Validates `form` and, when every field passes, creates the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackerError::StorePoisoned`] if the store lock is
    /// poisoned. Rejected forms are not errors; see
    /// [`SubmitOutcome::report`].
    pub async fn submit(&self, form: &TaskForm) -> TaskTrackerResult<SubmitOutcome> {
        let outcome = self.pipeline.validate(form).await;
        let accepted = match outcome.task {
            Some(task) => {
                let position = self.lock_store()?.create(task.clone());
                info!(position, "task accepted");
                Some(AcceptedTask { position, task })
            }
            None => None,
        };
        Ok(SubmitOutcome {
            report: outcome.report,
            accepted,
        })
    }

    /// Marks the task at `position` of the in-progress sequence complete.
    ///
    /// Returns `None` when `position` is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackerError::StorePoisoned`] if the store lock is
    /// poisoned.
    pub fn complete_at(&self, position: usize) -> TaskTrackerResult<Option<Task>> {
        Ok(self.lock_store()?.complete_at(position))
    }

    /// Produces location suggestions for `input`.
    pub async fn suggest(&self, input: &str) -> SuggestionOutcome {
        self.suggestions.suggest(input).await
    }

    /// Returns both collections.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackerError::StorePoisoned`] if the store lock is
    /// poisoned.
    pub fn snapshot(&self) -> TaskTrackerResult<TaskSnapshot> {
        Ok(self.lock_store()?.snapshot())
    }

    fn lock_store(&self) -> TaskTrackerResult<MutexGuard<'_, TaskStore<K>>> {
        self.store
            .lock()
            .map_err(|err| TaskTrackerError::StorePoisoned(err.to_string()))
    }
}
