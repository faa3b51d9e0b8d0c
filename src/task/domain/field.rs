//! Form fields and the fixed rejection messages shown for them.

use thiserror::Error;

/// Result of checking a single form field.
pub type FieldOutcome = Result<(), FieldError>;

/// Form fields checked before a task may be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    /// Free-text description of the work.
    TaskDetails,
    /// Email address of the person doing the work.
    Assignee,
    /// Date or date-time the work is due.
    DueDate,
    /// Location matched against the reference catalog.
    Location,
}

impl FormField {
    /// Every field in form order.
    pub const ALL: [Self; 4] = [
        Self::TaskDetails,
        Self::Assignee,
        Self::DueDate,
        Self::Location,
    ];

    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskDetails => "task_details",
            Self::Assignee => "assignee",
            Self::DueDate => "due_date",
            Self::Location => "location",
        }
    }

    /// Returns the error raised when the field is left empty.
    #[must_use]
    pub const fn required_error(self) -> FieldError {
        match self {
            Self::TaskDetails => FieldError::TaskDetailsRequired,
            Self::Assignee => FieldError::AssigneeRequired,
            Self::DueDate => FieldError::DueDateRequired,
            Self::Location => FieldError::LocationRequired,
        }
    }
}

/// Per-field rejection with its user-visible message.
///
/// The display strings are part of the public contract and must stay
/// verbatim.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// Task details were empty.
    #[error("Task Details Are Required!")]
    TaskDetailsRequired,
    /// Assignee was empty.
    #[error("Assignee Details Are Required!")]
    AssigneeRequired,
    /// Assignee is not an address on the accepted domain.
    #[error("Assignee Details Are Invalid!")]
    AssigneeInvalid,
    /// Due date was empty.
    #[error("Due Date is Required!")]
    DueDateRequired,
    /// Due date is unparsable or earlier than now.
    #[error("Due Date Already Passed!")]
    DueDatePassed,
    /// Location was empty.
    #[error("Location is Required!")]
    LocationRequired,
    /// Location is absent from the reference catalog, or the catalog could
    /// not be reached.
    #[error("Location is Invalid!")]
    LocationInvalid,
}

impl FieldError {
    /// Returns the field this error belongs to.
    #[must_use]
    pub const fn field(self) -> FormField {
        match self {
            Self::TaskDetailsRequired => FormField::TaskDetails,
            Self::AssigneeRequired | Self::AssigneeInvalid => FormField::Assignee,
            Self::DueDateRequired | Self::DueDatePassed => FormField::DueDate,
            Self::LocationRequired | Self::LocationInvalid => FormField::Location,
        }
    }

    /// Returns the user-visible message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TaskDetailsRequired => "Task Details Are Required!",
            Self::AssigneeRequired => "Assignee Details Are Required!",
            Self::AssigneeInvalid => "Assignee Details Are Invalid!",
            Self::DueDateRequired => "Due Date is Required!",
            Self::DueDatePassed => "Due Date Already Passed!",
            Self::LocationRequired => "Location is Required!",
            Self::LocationInvalid => "Location is Invalid!",
        }
    }
}
