//! Reference records fetched from the remote catalog.

use serde::{Deserialize, Serialize};

/// Catalog entry used as ground truth for locations.
///
/// Only `title` is read; any other fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    title: String,
}

impl ReferenceRecord {
    /// Creates a record with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Returns the title as delivered by the catalog.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Consumes the record, returning its title.
    #[must_use]
    pub fn into_title(self) -> String {
        self.title
    }

    /// Whether the title equals `value` ignoring case and surrounding
    /// whitespace.
    #[must_use]
    pub fn title_matches(&self, value: &str) -> bool {
        normalize_title(&self.title) == normalize_title(value)
    }

    /// Whether the normalized title contains an already normalized needle.
    #[must_use]
    pub fn title_contains_normalized(&self, needle: &str) -> bool {
        normalize_title(&self.title).contains(needle)
    }
}

/// Trims and lower-cases a title for comparison.
#[must_use]
pub fn normalize_title(value: &str) -> String {
    value.trim().to_lowercase()
}
