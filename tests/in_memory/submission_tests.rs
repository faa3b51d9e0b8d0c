//! Submitting forms through the tracker facade.

use super::helpers::{Harness, form_due, harness};
use rstest::rstest;
use taskboard::task::{
    domain::{FieldError, FormField, TaskForm},
    ports::{KeyValueStore, ReferenceError},
    services::IN_PROGRESS_SLOT,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_form_becomes_an_in_progress_task(harness: Harness) -> Result<(), eyre::Report> {
    let tracker = harness.tracker();
    tracker.start()?;

    let outcome = tracker.submit(&form_due("Write report", "2026-10-19")).await?;

    let accepted = outcome
        .accepted
        .ok_or_else(|| eyre::eyre!("form should be accepted"))?;
    eyre::ensure!(accepted.position == 0, "unexpected position {}", accepted.position);
    let snapshot = tracker.snapshot()?;
    eyre::ensure!(snapshot.in_progress == vec![accepted.task], "task not stored");
    eyre::ensure!(snapshot.completed.is_empty(), "nothing should be completed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_form_leaves_the_store_untouched(harness: Harness) -> Result<(), eyre::Report> {
    let tracker = harness.tracker();
    tracker.start()?;

    let outcome = tracker
        .submit(&form_due("Write report", "2026-10-19").with_assignee("alice@gmail.com"))
        .await?;

    eyre::ensure!(outcome.accepted.is_none(), "form should be rejected");
    eyre::ensure!(
        outcome.report.message(FormField::Assignee) == Some("Assignee Details Are Invalid!"),
        "unexpected report {:?}",
        outcome.report
    );
    eyre::ensure!(tracker.snapshot()?.is_empty(), "store should stay empty");
    eyre::ensure!(
        harness.storage.get(IN_PROGRESS_SLOT)?.is_none(),
        "nothing should be persisted"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn yesterday_is_rejected_and_tomorrow_accepted(harness: Harness) -> Result<(), eyre::Report> {
    let tracker = harness.tracker();

    let yesterday = tracker.submit(&form_due("Late", "2026-10-17")).await?;
    let tomorrow = tracker.submit(&form_due("On time", "2026-10-19")).await?;

    eyre::ensure!(
        yesterday.report.errors().collect::<Vec<_>>() == vec![FieldError::DueDatePassed],
        "yesterday should fail only the due date"
    );
    eyre::ensure!(tomorrow.accepted.is_some(), "tomorrow should be accepted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submissions_are_kept_in_due_date_order(harness: Harness) -> Result<(), eyre::Report> {
    let tracker = harness.tracker();

    let mut positions = Vec::new();
    for (details, due) in [
        ("third", "2026-12-01"),
        ("first", "2026-10-20"),
        ("second", "2026-11-01T09:00"),
    ] {
        let outcome = tracker.submit(&form_due(details, due)).await?;
        let accepted = outcome
            .accepted
            .ok_or_else(|| eyre::eyre!("{details} should be accepted"))?;
        positions.push(accepted.position);
    }

    eyre::ensure!(positions == vec![0, 0, 1], "unexpected positions {positions:?}");
    let order: Vec<String> = tracker
        .snapshot()?
        .in_progress
        .iter()
        .map(|task| task.task_details().to_owned())
        .collect();
    eyre::ensure!(order == ["first", "second", "third"], "unexpected order {order:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_catalog_rejects_location(harness: Harness) -> Result<(), eyre::Report> {
    harness.catalog.fail_with(ReferenceError::Status(503))?;
    let tracker = harness.tracker();

    let outcome = tracker.submit(&form_due("Write report", "2026-10-19")).await?;

    eyre::ensure!(outcome.accepted.is_none(), "form should be rejected");
    eyre::ensure!(
        outcome.report.message(FormField::Location) == Some("Location is Invalid!"),
        "location should be invalid"
    );
    eyre::ensure!(
        outcome.report.reference_error().is_some(),
        "catalog failure should be surfaced"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_form_reports_every_required_field(harness: Harness) -> Result<(), eyre::Report> {
    let tracker = harness.tracker();

    let outcome = tracker.submit(&TaskForm::default()).await?;

    for field in FormField::ALL {
        eyre::ensure!(
            outcome.report.outcome(field) == Err(field.required_error()),
            "{} should be required",
            field.as_str()
        );
    }
    eyre::ensure!(
        harness.catalog.fetch_count()? == 0,
        "empty location must not query the catalog"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tracker_offers_location_suggestions(harness: Harness) -> Result<(), eyre::Report> {
    use taskboard::task::services::SuggestionOutcome;

    let tracker = harness.tracker();

    let SuggestionOutcome::Ready(suggestions) = tracker.suggest("PU").await else {
        eyre::bail!("expected suggestions");
    };

    eyre::ensure!(
        suggestions.collect::<Vec<_>>() == ["Pune"],
        "unexpected suggestions"
    );
    Ok(())
}
