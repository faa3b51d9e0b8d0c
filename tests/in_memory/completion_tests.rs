//! Completing tasks through the tracker facade.

use super::helpers::{Harness, SnapshotLog, TestTracker, form_due, harness};
use rstest::rstest;
use std::sync::Arc;
use taskboard::task::ports::TaskStoreObserver;

async fn seeded(harness: &Harness) -> Result<TestTracker, eyre::Report> {
    let tracker = harness.tracker();
    tracker.start()?;
    for (details, due) in [
        ("A", "2026-10-19"),
        ("B", "2026-10-20"),
        ("C", "2026-10-21"),
    ] {
        tracker.submit(&form_due(details, due)).await?;
    }
    Ok(tracker)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_first_position_moves_earliest_task(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let tracker = seeded(&harness).await?;

    let moved = tracker
        .complete_at(0)?
        .ok_or_else(|| eyre::eyre!("expected a task at position 0"))?;

    eyre::ensure!(moved.task_details() == "A", "wrong task completed");
    let snapshot = tracker.snapshot()?;
    eyre::ensure!(snapshot.in_progress.len() == 2, "two tasks should remain");
    eyre::ensure!(snapshot.completed == vec![moved], "completed should hold A");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_past_the_end_is_ignored(harness: Harness) -> Result<(), eyre::Report> {
    let tracker = seeded(&harness).await?;
    let before = tracker.snapshot()?;

    eyre::ensure!(tracker.complete_at(3)?.is_none(), "nothing at position 3");
    eyre::ensure!(tracker.snapshot()? == before, "state should not change");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn observers_follow_submissions_and_completions(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let tracker = harness.tracker();
    let log = Arc::new(SnapshotLog::default());
    tracker.subscribe(Arc::clone(&log) as Arc<dyn TaskStoreObserver>)?;

    tracker.start()?;
    tracker.submit(&form_due("A", "2026-10-19")).await?;
    tracker
        .submit(&form_due("B", "2026-10-19").with_location("Atlantis"))
        .await?;
    tracker.complete_at(0)?;

    let seen = log.snapshots();
    eyre::ensure!(seen.len() == 3, "expected load, create and complete, got {}", seen.len());
    eyre::ensure!(seen[0].is_empty(), "initial load should be empty");
    eyre::ensure!(seen[1].in_progress.len() == 1, "create should be visible");
    eyre::ensure!(
        seen[2].in_progress.is_empty() && seen[2].completed.len() == 1,
        "completion should be visible"
    );
    Ok(())
}
