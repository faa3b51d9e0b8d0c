//! Domain model for the task lifecycle.
//!
//! The task domain models submitted forms, accepted tasks, due dates,
//! reference records, and the two-state lifecycle while keeping storage and
//! network concerns outside of the domain boundary.

mod due_date;
mod error;
mod field;
mod form;
mod reference;
mod snapshot;
mod task;

pub use due_date::{DueDate, parse_due_instant};
pub use error::DueDateError;
pub use field::{FieldError, FieldOutcome, FormField};
pub use form::TaskForm;
pub use reference::{ReferenceRecord, normalize_title};
pub use snapshot::TaskSnapshot;
pub use task::{PersistedTaskData, Task, TaskState};
