//! Adapter implementations for task lifecycle ports.

pub mod directory;
pub mod http;
pub mod memory;
