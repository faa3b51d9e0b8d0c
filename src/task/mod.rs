//! Task lifecycle management for Taskboard.
//!
//! This module validates submitted task forms against local rules and the
//! remote reference catalog, stores accepted tasks in an in-progress sequence
//! sorted by due date, moves them one way into the completed sequence, and
//! persists both sequences after every change. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Field rules and the validation pipeline in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
