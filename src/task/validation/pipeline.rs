//! Validation pipeline combining all field rules.

use crate::task::{
    domain::{FieldError, FieldOutcome, FormField, Task, TaskForm},
    ports::{NoFeedback, ReferenceCatalog, ReferenceError, ValidationFeedback},
    validation::rules::{self, AssigneeRule, ReferenceCheck},
};
use chrono::{FixedOffset, Offset, Utc};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Per-field results of one validation run.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    outcomes: BTreeMap<FormField, FieldOutcome>,
    reference_error: Option<ReferenceError>,
}

impl ValidationReport {
    /// Returns the outcome recorded for `field`.
    #[must_use]
    pub fn outcome(&self, field: FormField) -> FieldOutcome {
        self.outcomes.get(&field).copied().unwrap_or(Ok(()))
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcomes.values().all(Result::is_ok)
    }

    /// Returns the error message for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: FormField) -> Option<&'static str> {
        self.outcome(field).err().map(FieldError::message)
    }

    /// Iterates over the failed fields' errors in form order.
    pub fn errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.outcomes
            .values()
            .filter_map(|outcome| outcome.as_ref().err().copied())
    }

    /// Returns the catalog failure behind a `Location is Invalid!` result.
    ///
    /// `None` means the catalog answered, or was never consulted.
    #[must_use]
    pub const fn reference_error(&self) -> Option<&ReferenceError> {
        self.reference_error.as_ref()
    }
}

/// Report plus the task built from the form when every field passed.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Per-field results.
    pub report: ValidationReport,
    /// Accepted task; `None` unless the report is all-ok.
    pub task: Option<Task>,
}

impl ValidationOutcome {
    /// Whether the form was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.task.is_some()
    }
}

/// Runs every field rule against a submitted form.
///
/// All four fields are evaluated and reported on every run; a failing field
/// never prevents the others from being checked.
pub struct ValidationPipeline<R, C>
where
    R: ReferenceCatalog,
    C: Clock + Send + Sync,
{
    catalog: Arc<R>,
    clock: Arc<C>,
    assignee_rule: AssigneeRule,
    utc_offset: FixedOffset,
    feedback: Arc<dyn ValidationFeedback>,
}

impl<R, C> ValidationPipeline<R, C>
where
    R: ReferenceCatalog,
    C: Clock + Send + Sync,
{
    /// Creates a pipeline reading dates in UTC and reporting to no one.
    #[must_use]
    pub fn new(catalog: Arc<R>, clock: Arc<C>, assignee_rule: AssigneeRule) -> Self {
        Self {
            catalog,
            clock,
            assignee_rule,
            utc_offset: Utc.fix(),
            feedback: Arc::new(NoFeedback),
        }
    }

    /// Sets the offset used for due dates written without one.
    #[must_use]
    pub const fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Sets the sink receiving per-field indicators.
    #[must_use]
    pub fn with_feedback(mut self, feedback: Arc<dyn ValidationFeedback>) -> Self {
        self.feedback = feedback;
        self
    }

    /// Returns the offset used for due dates written without one.
    #[must_use]
    pub const fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Validates `form` and builds a task when every field passes.
    ///
    /// Suspends only while the reference catalog is consulted for the
    /// location. Every field is reported to the feedback sink, in form order.
    pub async fn validate(&self, form: &TaskForm) -> ValidationOutcome {
        let now = self.clock.utc();

        let mut outcomes = BTreeMap::new();
        outcomes.insert(
            FormField::TaskDetails,
            rules::validate_task_details(form.task_details()),
        );
        outcomes.insert(
            FormField::Assignee,
            rules::validate_assignee(form.assignee(), &self.assignee_rule),
        );
        outcomes.insert(
            FormField::DueDate,
            rules::validate_due_date(form.due_date(), now, self.utc_offset),
        );
        let (location, reference_error) = self.check_location(form.location()).await;
        outcomes.insert(FormField::Location, location);

        for (field, outcome) in &outcomes {
            self.feedback.field_checked(*field, outcome);
        }

        let report = ValidationReport {
            outcomes,
            reference_error,
        };
        let task = report.is_ok().then(|| Task::from_validated_form(form));
        debug!(
            accepted = task.is_some(),
            failed_fields = report.errors().count(),
            "form validated"
        );
        ValidationOutcome { report, task }
    }

    async fn check_location(&self, value: &str) -> (FieldOutcome, Option<ReferenceError>) {
        if let Err(err) = rules::non_empty(value, FormField::Location) {
            return (Err(err), None);
        }
        let check = rules::exists_in_reference(&*self.catalog, value).await;
        let outcome = rules::location_outcome(&check);
        match check {
            ReferenceCheck::Unavailable(err) => (outcome, Some(err)),
            ReferenceCheck::Found | ReferenceCheck::NotFound => (outcome, None),
        }
    }
}
