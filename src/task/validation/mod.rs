//! Form validation for task submissions.
//!
//! This module provides the individual field rules and the pipeline that
//! runs all of them against a submitted form.

pub mod pipeline;
pub mod rules;

pub use pipeline::{ValidationOutcome, ValidationPipeline, ValidationReport};
pub use rules::{AssigneeRule, DEFAULT_ASSIGNEE_DOMAIN, ReferenceCheck};
