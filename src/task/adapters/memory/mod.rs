//! In-memory adapters for tests and embedders.

mod reference;
mod storage;

pub use reference::InMemoryReferenceCatalog;
pub use storage::InMemoryKeyValueStore;
