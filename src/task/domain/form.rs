//! Raw form submission handed to the validation pipeline.

use super::PersistedTaskData;

/// Untrusted field values as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    task_details: String,
    assignee: String,
    due_date: String,
    location: String,
}

impl TaskForm {
    /// Creates a form from its four raw field values.
    #[must_use]
    pub fn new(
        task_details: impl Into<String>,
        assignee: impl Into<String>,
        due_date: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            task_details: task_details.into(),
            assignee: assignee.into(),
            due_date: due_date.into(),
            location: location.into(),
        }
    }

    /// Replaces the task details.
    #[must_use]
    pub fn with_task_details(mut self, value: impl Into<String>) -> Self {
        self.task_details = value.into();
        self
    }

    /// Replaces the assignee.
    #[must_use]
    pub fn with_assignee(mut self, value: impl Into<String>) -> Self {
        self.assignee = value.into();
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub fn with_due_date(mut self, value: impl Into<String>) -> Self {
        self.due_date = value.into();
        self
    }

    /// Replaces the location.
    #[must_use]
    pub fn with_location(mut self, value: impl Into<String>) -> Self {
        self.location = value.into();
        self
    }

    /// Returns the trimmed task details.
    #[must_use]
    pub fn task_details(&self) -> &str {
        self.task_details.trim()
    }

    /// Returns the trimmed assignee.
    #[must_use]
    pub fn assignee(&self) -> &str {
        self.assignee.trim()
    }

    /// Returns the trimmed due date.
    #[must_use]
    pub fn due_date(&self) -> &str {
        self.due_date.trim()
    }

    /// Returns the trimmed location.
    #[must_use]
    pub fn location(&self) -> &str {
        self.location.trim()
    }

    /// Copies the untrimmed values into a task record.
    pub(crate) fn to_persisted(&self) -> PersistedTaskData {
        PersistedTaskData {
            task_details: self.task_details.clone(),
            assignee: self.assignee.clone(),
            due_date: self.due_date.clone(),
            location: self.location.clone(),
        }
    }
}
