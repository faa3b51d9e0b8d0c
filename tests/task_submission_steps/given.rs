//! Given steps for task submission BDD scenarios.

use super::world::{SubmissionWorld, run_async, split_list};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::{ReferenceRecord, TaskForm};

#[given(r#"a location catalog listing "{titles}""#)]
fn catalog_listing(world: &mut SubmissionWorld, titles: String) -> Result<(), eyre::Report> {
    let records = split_list(&titles)
        .into_iter()
        .map(ReferenceRecord::new)
        .collect();
    world
        .catalog
        .set_records(records)
        .wrap_err("seed reference catalog")?;
    Ok(())
}

#[given("a tracker with no saved tasks")]
fn tracker_with_no_saved_tasks(world: &mut SubmissionWorld) -> Result<(), eyre::Report> {
    let tracker = world.build_tracker()?;
    let loaded = tracker.start().wrap_err("start tracker")?;
    eyre::ensure!(loaded.is_empty(), "expected no saved tasks, found {loaded:?}");
    world.tracker = Some(tracker);
    Ok(())
}

#[given(r#"the task "{details}" due "{due}" has been submitted"#)]
fn task_has_been_submitted(
    world: &mut SubmissionWorld,
    details: String,
    due: String,
) -> Result<(), eyre::Report> {
    let form = TaskForm::new(details.as_str(), "alice@dream11.com", due, "Mumbai");
    let outcome = run_async(world.tracker()?.submit(&form)).wrap_err("submit seed task")?;
    eyre::ensure!(
        outcome.accepted.is_some(),
        "seed task {details} was rejected: {:?}",
        outcome.report
    );
    Ok(())
}
