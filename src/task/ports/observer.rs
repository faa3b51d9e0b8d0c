//! Notification hooks for the presentation layer.

use crate::task::domain::{FieldOutcome, FormField, TaskSnapshot};

/// Receives the store's collections after every change.
///
/// Observers are registered once and called synchronously, after the change
/// has been persisted.
pub trait TaskStoreObserver: Send + Sync {
    /// Called with the current state of both collections.
    fn tasks_changed(&self, snapshot: &TaskSnapshot);
}

/// Receives the success or error indicator for each checked field.
pub trait ValidationFeedback: Send + Sync {
    /// Called once per field on every validation run.
    fn field_checked(&self, field: FormField, outcome: &FieldOutcome);
}

/// Feedback sink that discards every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl ValidationFeedback for NoFeedback {
    fn field_checked(&self, _field: FormField, _outcome: &FieldOutcome) {}
}
