//! Due date values and their conversion to comparable instants.

use super::DueDateError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local date-time layouts accepted in addition to RFC 3339.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Due date exactly as it was submitted.
///
/// The raw text is kept so stored records round-trip byte for byte; the
/// instant is derived on demand because its meaning depends on the offset
/// used for values that carry none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(String);

impl DueDate {
    /// Wraps a raw due date string without interpreting it.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw due date text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the due date into a UTC instant.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError`] when the text is empty or not a recognized
    /// date format.
    pub fn instant(&self, offset: FixedOffset) -> Result<DateTime<Utc>, DueDateError> {
        parse_due_instant(&self.0, offset)
    }

    /// Ordering key for the in-progress sequence.
    ///
    /// Parsable dates order by instant; unparsable dates order after all of
    /// them.
    #[must_use]
    pub fn sort_key(&self, offset: FixedOffset) -> (bool, Option<DateTime<Utc>>) {
        let instant = self.instant(offset).ok();
        (instant.is_none(), instant)
    }
}

impl AsRef<str> for DueDate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a due date string into a UTC instant.
///
/// Accepts RFC 3339 timestamps, local date-times (`T` or space separated,
/// seconds optional), and bare dates, which resolve to midnight. Values
/// without an offset are read in `offset`.
///
/// # Errors
///
/// Returns [`DueDateError::Empty`] for blank input,
/// [`DueDateError::Unrecognized`] when no format matches, and
/// [`DueDateError::OutOfRange`] when the local time cannot be resolved.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use taskboard::task::domain::parse_due_instant;
///
/// let utc = FixedOffset::east_opt(0).expect("valid offset");
/// let instant = parse_due_instant("2026-10-19", utc).expect("valid date");
/// assert_eq!(instant, Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).single().expect("valid timestamp"));
/// ```
pub fn parse_due_instant(raw: &str, offset: FixedOffset) -> Result<DateTime<Utc>, DueDateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DueDateError::Empty);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| DueDateError::Unrecognized(raw.to_owned()))?;

    naive
        .and_local_timezone(offset)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| DueDateError::OutOfRange(raw.to_owned()))
}
