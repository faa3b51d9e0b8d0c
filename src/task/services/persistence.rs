//! Snapshot persistence over a key-value store.

use crate::task::{
    domain::{Task, TaskSnapshot},
    ports::{KeyValueStore, StorageError, StorageResult},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key holding the in-progress collection.
pub const IN_PROGRESS_SLOT: &str = "inProgressTasks";

/// Storage key holding the completed collection.
pub const COMPLETED_SLOT: &str = "completedTasks";

/// Writes and reads both task collections as JSON arrays.
///
/// Each collection lives in its own slot. Both slots are encoded before
/// either is written, and a failed second write undoes the first, so a
/// reload never sees one slot updated and the other stale.
#[derive(Debug)]
pub struct TaskPersistence<K>
where
    K: KeyValueStore,
{
    storage: Arc<K>,
}

impl<K> TaskPersistence<K>
where
    K: KeyValueStore,
{
    /// Creates persistence over the given store.
    #[must_use]
    pub const fn new(storage: Arc<K>) -> Self {
        Self { storage }
    }

    /// Writes both collections.
    ///
    /// The in-progress slot is written first. If the completed slot then
    /// fails to write, the in-progress slot is put back to its previous
    /// value so storage keeps the last pair that was saved together.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] if a collection cannot be encoded,
    /// or the store's error if a read or write fails.
    pub fn save(&self, snapshot: &TaskSnapshot) -> StorageResult<()> {
        let in_progress = encode_slot(IN_PROGRESS_SLOT, &snapshot.in_progress)?;
        let completed = encode_slot(COMPLETED_SLOT, &snapshot.completed)?;
        let previous = self.storage.get(IN_PROGRESS_SLOT)?;

        self.storage.set(IN_PROGRESS_SLOT, &in_progress)?;
        if let Err(err) = self.storage.set(COMPLETED_SLOT, &completed) {
            self.roll_back_in_progress(previous.as_deref());
            return Err(err);
        }
        debug!(
            in_progress = snapshot.in_progress.len(),
            completed = snapshot.completed.len(),
            "tasks saved"
        );
        Ok(())
    }

    fn roll_back_in_progress(&self, previous: Option<&str>) {
        // A slot that never existed loads the same as an empty array.
        let restored = previous.unwrap_or("[]");
        if let Err(err) = self.storage.set(IN_PROGRESS_SLOT, restored) {
            warn!(
                slot = IN_PROGRESS_SLOT,
                error = %err,
                "failed to restore slot after partial save"
            );
        }
    }

    /// Reads both collections.
    ///
    /// A slot that is missing, unreadable, or not a JSON array of task
    /// records loads as an empty collection.
    #[must_use]
    pub fn load(&self) -> TaskSnapshot {
        TaskSnapshot::new(
            self.load_slot(IN_PROGRESS_SLOT),
            self.load_slot(COMPLETED_SLOT),
        )
    }

    fn load_slot(&self, key: &str) -> Vec<Task> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                debug!(slot = key, "slot empty, starting with no tasks");
                return Vec::new();
            }
            Err(err) => {
                warn!(slot = key, error = %err, "slot unreadable, starting with no tasks");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(slot = key, error = %err, "slot unparsable, starting with no tasks");
            Vec::new()
        })
    }
}

fn encode_slot(key: &str, tasks: &[Task]) -> StorageResult<String> {
    serde_json::to_string(tasks).map_err(|err| StorageError::Encode {
        key: key.to_owned(),
        source: Arc::new(err),
    })
}
