//! Error types for due date parsing.

use thiserror::Error;

/// Errors returned while interpreting a due date string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DueDateError {
    /// The due date is empty after trimming.
    #[error("due date must not be empty")]
    Empty,

    /// The value is not in any accepted date or date-time format.
    #[error("unrecognized due date '{0}'")]
    Unrecognized(String),

    /// The value names a local time that the configured offset cannot map.
    #[error("due date '{0}' is out of range")]
    OutOfRange(String),
}
