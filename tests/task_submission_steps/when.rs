//! When steps for task submission BDD scenarios.

use super::world::{SubmissionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::domain::TaskForm;

#[when(r#"the task "{details}" is submitted for "{assignee}" due "{due}" at "{location}""#)]
fn submit_task(
    world: &mut SubmissionWorld,
    details: String,
    assignee: String,
    due: String,
    location: String,
) -> Result<(), eyre::Report> {
    let form = TaskForm::new(details, assignee, due, location);
    let outcome = run_async(world.tracker()?.submit(&form)).wrap_err("submit task")?;
    world.last_submission = Some(outcome);
    Ok(())
}

#[when("the task at position {position:usize} is completed")]
fn complete_task(world: &mut SubmissionWorld, position: usize) -> Result<(), eyre::Report> {
    let completed = world
        .tracker()?
        .complete_at(position)
        .wrap_err("complete task")?;
    world.last_completion = Some(completed);
    Ok(())
}
