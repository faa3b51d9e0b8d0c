//! Reloading state written by an earlier tracker.

use super::helpers::{Harness, form_due, harness};
use rstest::rstest;
use taskboard::task::{ports::KeyValueStore, services::IN_PROGRESS_SLOT};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_session_sees_previous_tasks(harness: Harness) -> Result<(), eyre::Report> {
    let first = harness.tracker();
    first.start()?;
    first.submit(&form_due("A", "2026-10-19")).await?;
    first.submit(&form_due("B", "2026-10-20")).await?;
    first.complete_at(1)?;
    let written = first.snapshot()?;

    let second = harness.tracker();
    let loaded = second.start()?;

    eyre::ensure!(loaded == written, "reloaded state differs: {loaded:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_slot_starts_empty_and_recovers_on_next_write(
    harness: Harness,
) -> Result<(), eyre::Report> {
    harness.storage.set(IN_PROGRESS_SLOT, "{not json")?;
    let tracker = harness.tracker();

    eyre::ensure!(tracker.start()?.is_empty(), "corrupt slot should load empty");

    tracker.submit(&form_due("A", "2026-10-19")).await?;
    let reloaded = harness.tracker().start()?;
    eyre::ensure!(reloaded.in_progress.len() == 1, "slot should be rewritten");
    Ok(())
}
