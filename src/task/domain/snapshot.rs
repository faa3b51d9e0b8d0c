//! Serializable literal form of both task collections.

use super::Task;
use serde::{Deserialize, Serialize};

/// Both task collections at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Tasks not yet done, ascending by due date.
    pub in_progress: Vec<Task>,
    /// Tasks marked done, in completion order.
    pub completed: Vec<Task>,
}

impl TaskSnapshot {
    /// Creates a snapshot from its two collections.
    #[must_use]
    pub const fn new(in_progress: Vec<Task>, completed: Vec<Task>) -> Self {
        Self {
            in_progress,
            completed,
        }
    }

    /// Total number of tasks across both collections.
    #[must_use]
    pub fn total(&self) -> usize {
        self.in_progress.len() + self.completed.len()
    }

    /// Whether both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_progress.is_empty() && self.completed.is_empty()
    }
}
