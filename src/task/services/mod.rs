//! Application services for the task lifecycle.

mod persistence;
mod store;
mod suggestions;
mod tracker;

pub use persistence::{COMPLETED_SLOT, IN_PROGRESS_SLOT, TaskPersistence};
pub use store::TaskStore;
pub use suggestions::{SuggestionOutcome, SuggestionService, Suggestions};
pub use tracker::{AcceptedTask, SubmitOutcome, TaskTracker, TaskTrackerError, TaskTrackerResult};
