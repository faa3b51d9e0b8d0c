//! Individual validation rule implementations.
//!
//! Each rule inspects one trimmed field value. Rules return `Ok(())` on
//! success or the specific [`FieldError`] to show for the field. Only
//! [`exists_in_reference`] has a side effect: it fetches the reference
//! catalog.

use crate::task::{
    domain::{FieldError, FieldOutcome, FormField, parse_due_instant},
    ports::{ReferenceCatalog, ReferenceError},
};
use chrono::{DateTime, FixedOffset, Utc};
use regex::Regex;
use tracing::{debug, warn};

/// Mail domain assignees must belong to unless configured otherwise.
pub const DEFAULT_ASSIGNEE_DOMAIN: &str = "dream11.com";

/// Accepted shape of an assignee address.
///
/// The local part is limited to `[A-Za-z0-9._%+-]+`; the domain must match
/// exactly, including case.
#[derive(Debug, Clone)]
pub struct AssigneeRule {
    domain: String,
    pattern: Regex,
}

impl AssigneeRule {
    /// Builds the rule for addresses on `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if the compiled pattern exceeds the regex
    /// size limits.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard::task::validation::AssigneeRule;
    ///
    /// let rule = AssigneeRule::for_domain("dream11.com").expect("valid rule");
    /// assert!(rule.matches("alice@dream11.com"));
    /// assert!(!rule.matches("alice@gmail.com"));
    /// ```
    pub fn for_domain(domain: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"^[A-Za-z0-9._%+-]+@{}$",
            regex::escape(domain)
        ))?;
        Ok(Self {
            domain: domain.to_owned(),
            pattern,
        })
    }

    /// Builds the rule for [`DEFAULT_ASSIGNEE_DOMAIN`].
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] under the same conditions as
    /// [`AssigneeRule::for_domain`].
    pub fn default_domain() -> Result<Self, regex::Error> {
        Self::for_domain(DEFAULT_ASSIGNEE_DOMAIN)
    }

    /// Returns the accepted domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether `value` is an address on the accepted domain.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

/// Outcome of looking a location up in the reference catalog.
#[derive(Debug, Clone)]
pub enum ReferenceCheck {
    /// A record title matched.
    Found,
    /// The catalog answered but no title matched.
    NotFound,
    /// The catalog could not be consulted.
    Unavailable(ReferenceError),
}

impl ReferenceCheck {
    /// Whether a matching record was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }
}

/// Rejects an empty value with the field's "required" error.
///
/// # Errors
///
/// Returns [`FormField::required_error`] for `field` when `value` is empty.
pub const fn non_empty(value: &str, field: FormField) -> FieldOutcome {
    if value.is_empty() {
        return Err(field.required_error());
    }
    Ok(())
}

/// Whether `value` is an address accepted by `rule`.
#[must_use]
pub fn matches_email_domain(value: &str, rule: &AssigneeRule) -> bool {
    rule.matches(value)
}

/// Whether `value` parses to an instant at or after `now`.
///
/// Unparsable values are not future-or-present.
#[must_use]
pub fn is_future_or_present(value: &str, now: DateTime<Utc>, offset: FixedOffset) -> bool {
    match parse_due_instant(value, offset) {
        Ok(due) => due >= now,
        Err(err) => {
            debug!(value, error = %err, "due date could not be parsed");
            false
        }
    }
}

/// Looks `value` up in the reference catalog.
///
/// A title matches when it equals `value` after trimming and case folding.
/// Catalog failures are logged and reported as
/// [`ReferenceCheck::Unavailable`].
pub async fn exists_in_reference<R>(catalog: &R, value: &str) -> ReferenceCheck
where
    R: ReferenceCatalog + ?Sized,
{
    match catalog.fetch_records().await {
        Ok(records) => {
            if records.iter().any(|record| record.title_matches(value)) {
                ReferenceCheck::Found
            } else {
                ReferenceCheck::NotFound
            }
        }
        Err(err) => {
            warn!(error = %err, location = value, "reference lookup failed");
            ReferenceCheck::Unavailable(err)
        }
    }
}

/// Validates the task details field.
///
/// # Errors
///
/// Returns [`FieldError::TaskDetailsRequired`] when empty.
pub const fn validate_task_details(value: &str) -> FieldOutcome {
    non_empty(value, FormField::TaskDetails)
}

/// Validates the assignee field.
///
/// # Errors
///
/// Returns [`FieldError::AssigneeRequired`] when empty and
/// [`FieldError::AssigneeInvalid`] when the address is not on the accepted
/// domain.
pub fn validate_assignee(value: &str, rule: &AssigneeRule) -> FieldOutcome {
    non_empty(value, FormField::Assignee)?;
    if !matches_email_domain(value, rule) {
        return Err(FieldError::AssigneeInvalid);
    }
    Ok(())
}

/// Validates the due date field against `now`.
///
/// # Errors
///
/// Returns [`FieldError::DueDateRequired`] when empty and
/// [`FieldError::DueDatePassed`] when unparsable or in the past.
pub fn validate_due_date(value: &str, now: DateTime<Utc>, offset: FixedOffset) -> FieldOutcome {
    non_empty(value, FormField::DueDate)?;
    if !is_future_or_present(value, now, offset) {
        return Err(FieldError::DueDatePassed);
    }
    Ok(())
}

/// Maps a reference lookup onto the location field outcome.
///
/// # Errors
///
/// Returns [`FieldError::LocationInvalid`] unless the lookup found a match.
pub const fn location_outcome(check: &ReferenceCheck) -> FieldOutcome {
    if check.is_found() {
        return Ok(());
    }
    Err(FieldError::LocationInvalid)
}
