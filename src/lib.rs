//! Taskboard: task lifecycle and validation engine.
//!
//! This crate decides whether a submitted task is accepted, keeps accepted
//! tasks in an in-progress sequence ordered by due date, moves them one way
//! into a completed sequence, and persists both sequences so they survive a
//! restart.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task, form, and due date types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the reference catalog, storage,
//!   and presentation callbacks
//! - **Adapters**: Concrete implementations of ports (HTTP, directory,
//!   in-memory)
//!
//! # Modules
//!
//! - [`task`]: Validation, lifecycle storage, and location suggestions
//! - [`config`]: File-based configuration for the engine and its adapters

pub mod config;
pub mod task;
