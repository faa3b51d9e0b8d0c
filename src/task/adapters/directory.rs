//! Directory-backed key-value store.
//!
//! Each key is stored as `<key>.json` inside a capability-scoped directory.
//! Writes go to a temporary sibling which is then renamed over the slot, so a
//! reader never sees a half-written value.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

const SLOT_EXTENSION: &str = "json";

/// Key-value store writing one file per key.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
    root: Utf8PathBuf,
}

impl DirectoryKeyValueStore {
    /// Opens `path`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(StorageError::backend)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(StorageError::backend)?;
        Ok(Self {
            dir,
            root: path.to_owned(),
        })
    }

    /// Returns the directory the store writes into.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = slot_file_name(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = slot_file_name(key)?;
        let staging_name = format!("{file_name}.tmp");
        self.dir
            .write(&staging_name, value)
            .map_err(StorageError::backend)?;
        self.dir
            .rename(&staging_name, &self.dir, &file_name)
            .map_err(StorageError::backend)
    }
}

/// Maps a key to its file name.
///
/// Keys must be non-empty ASCII alphanumerics, `_`, or `-`, which keeps
/// every slot a plain file inside the store's directory.
fn slot_file_name(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{SLOT_EXTENSION}"))
}
