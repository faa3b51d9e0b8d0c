//! Task record and lifecycle state types.

use super::{DueDate, TaskForm};
use serde::{Deserialize, Serialize};

/// Collection a task belongs to.
///
/// A task's state is the collection it sits in; it is not stored inside the
/// task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskState {
    /// Task has been accepted and work is outstanding.
    InProgress,
    /// Task has been marked done.
    Completed,
}

impl TaskState {
    /// Whether the lifecycle permits moving from `self` to `next`.
    ///
    /// The only transition is `InProgress -> Completed`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::InProgress, Self::Completed))
    }
}

/// An accepted unit of work.
///
/// Field names on the wire are fixed so previously stored records keep
/// loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Task")]
    task_details: String,
    #[serde(rename = "Assignee")]
    assignee: String,
    #[serde(rename = "Due Date")]
    due_date: DueDate,
    #[serde(rename = "location")]
    location: String,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored task details.
    pub task_details: String,
    /// Stored assignee.
    pub assignee: String,
    /// Stored raw due date.
    pub due_date: String,
    /// Stored location.
    pub location: String,
}

impl Task {
    /// Builds a task from a form that has passed every field check.
    ///
    /// Values are kept exactly as entered; checks ran on their trimmed form.
    pub(crate) fn from_validated_form(form: &TaskForm) -> Self {
        Self::from_persisted(form.to_persisted())
    }

    /// Reconstructs a task from stored data without re-validating it.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            task_details: data.task_details,
            assignee: data.assignee,
            due_date: DueDate::new(data.due_date),
            location: data.location,
        }
    }

    /// Returns the task details.
    #[must_use]
    pub fn task_details(&self) -> &str {
        &self.task_details
    }

    /// Returns the assignee.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> &DueDate {
        &self.due_date
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}
