//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what the engine wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<I, Key, Value>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
        Key: Into<String>,
        Value: Into<String>,
    {
        let slots = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Removes every stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the lock is poisoned.
    pub fn clear(&self) -> StorageResult<()> {
        self.slots
            .write()
            .map_err(|err| StorageError::backend(std::io::Error::other(err.to_string())))?
            .clear();
        Ok(())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|err| StorageError::backend(std::io::Error::other(err.to_string())))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|err| StorageError::backend(std::io::Error::other(err.to_string())))?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
