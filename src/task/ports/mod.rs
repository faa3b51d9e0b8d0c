//! Port contracts for the task lifecycle engine.
//!
//! Ports define infrastructure-agnostic interfaces used by task services:
//! the remote reference catalog, durable key-value storage, and the
//! notification hooks the presentation layer subscribes to.

pub mod observer;
pub mod reference;
pub mod storage;

pub use observer::{NoFeedback, TaskStoreObserver, ValidationFeedback};
pub use reference::{ReferenceCatalog, ReferenceError, ReferenceResult};
pub use storage::{KeyValueStore, StorageError, StorageResult};
