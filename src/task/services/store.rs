//! Task store owning both lifecycle collections.

use crate::task::{
    domain::{Task, TaskSnapshot, TaskState},
    ports::{KeyValueStore, TaskStoreObserver},
    services::TaskPersistence,
};
use chrono::{FixedOffset, Offset, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

/// Owner of the in-progress and completed collections.
///
/// All mutation flows through [`TaskStore::create`],
/// [`TaskStore::complete_at`], and [`TaskStore::restore`], which keep the
/// in-progress sequence sorted ascending by due date and every task in
/// exactly one collection. Mutations persist immediately and then notify
/// subscribers. Observers run while the store is borrowed and must not call
/// back into it.
pub struct TaskStore<K>
where
    K: KeyValueStore,
{
    in_progress: Vec<Task>,
    completed: Vec<Task>,
    persistence: TaskPersistence<K>,
    utc_offset: FixedOffset,
    observers: Vec<Arc<dyn TaskStoreObserver>>,
}

impl<K> TaskStore<K>
where
    K: KeyValueStore,
{
    /// Creates an empty store that saves through `persistence`.
    #[must_use]
    pub fn new(persistence: TaskPersistence<K>) -> Self {
        Self {
            in_progress: Vec::new(),
            completed: Vec::new(),
            persistence,
            utc_offset: Utc.fix(),
            observers: Vec::new(),
        }
    }

    /// Sets the offset used to order due dates written without one.
    #[must_use]
    pub const fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Registers an observer for every subsequent change.
    pub fn subscribe(&mut self, observer: Arc<dyn TaskStoreObserver>) {
        self.observers.push(observer);
    }

    /// Returns the in-progress tasks, ascending by due date.
    #[must_use]
    pub fn in_progress(&self) -> &[Task] {
        &self.in_progress
    }

    /// Returns the completed tasks in completion order.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Finds which collection holds `task` and at what position.
    #[must_use]
    pub fn locate(&self, task: &Task) -> Option<(TaskState, usize)> {
        if let Some(position) = self.in_progress.iter().position(|t| t == task) {
            return Some((TaskState::InProgress, position));
        }
        self.completed
            .iter()
            .position(|t| t == task)
            .map(|position| (TaskState::Completed, position))
    }

    /// Adds an accepted task to the in-progress sequence.
    ///
    /// The sequence is re-sorted by due date; tasks with equal due dates keep
    /// their insertion order. Returns the task's position after sorting.
    pub fn create(&mut self, task: Task) -> usize {
        let key = task.due_date().sort_key(self.utc_offset);
        let position = self
            .in_progress
            .iter()
            .filter(|existing| existing.due_date().sort_key(self.utc_offset) <= key)
            .count();

        self.in_progress.push(task);
        self.sort_in_progress();
        debug!(position, in_progress = self.in_progress.len(), "task created");
        self.commit("create");
        position
    }

    /// Moves the task at `position` of the sorted in-progress sequence to the
    /// end of the completed sequence.
    ///
    /// Returns the moved task, or `None` without any change when `position`
    /// is out of bounds.
    pub fn complete_at(&mut self, position: usize) -> Option<Task> {
        if position >= self.in_progress.len() {
            debug!(
                position,
                in_progress = self.in_progress.len(),
                "completion position out of bounds, ignoring"
            );
            return None;
        }

        if !TaskState::InProgress.can_transition_to(TaskState::Completed) {
            return None;
        }
        let task = self.in_progress.remove(position);
        self.completed.push(task.clone());
        debug!(position, completed = self.completed.len(), "task completed");
        self.commit("complete");
        Some(task)
    }

    /// Returns both collections in their serializable form.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot::new(self.in_progress.clone(), self.completed.clone())
    }

    /// Replaces both collections wholesale.
    ///
    /// The restored in-progress sequence is sorted like any other; restoring
    /// a snapshot taken from a store reproduces it exactly. Observers are
    /// notified; nothing is written back to storage.
    pub fn restore(&mut self, snapshot: TaskSnapshot) {
        self.in_progress = snapshot.in_progress;
        self.completed = snapshot.completed;
        self.sort_in_progress();
        self.notify(&self.snapshot());
    }

    /// Restores both collections from storage.
    ///
    /// Unreadable slots load as empty collections.
    pub fn load(&mut self) {
        let snapshot = self.persistence.load();
        debug!(
            in_progress = snapshot.in_progress.len(),
            completed = snapshot.completed.len(),
            "tasks loaded"
        );
        self.restore(snapshot);
    }

    fn sort_in_progress(&mut self) {
        let offset = self.utc_offset;
        self.in_progress
            .sort_by_cached_key(|task| task.due_date().sort_key(offset));
    }

    fn commit(&self, operation: &'static str) {
        let snapshot = self.snapshot();
        if let Err(err) = self.persistence.save(&snapshot) {
            warn!(operation, error = %err, "failed to persist tasks");
        }
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &TaskSnapshot) {
        for observer in &self.observers {
            observer.tasks_changed(snapshot);
        }
    }
}
