//! Then steps for task board lifecycle BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{TaskDomainError, TaskStatus},
    services::{TaskBoardError, TransitionOutcome},
};

fn count_is(
    world: &BoardWorld,
    status: TaskStatus,
    expected: usize,
) -> Result<(), eyre::Report> {
    let actual = world.service.count_by_status(status);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected {expected} tasks with status {status}, found {actual}"
        ));
    }
    Ok(())
}

#[then("the to-do count is {count:usize}")]
fn todo_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    count_is(world, TaskStatus::Todo, count)
}

#[then("the done count is {count:usize}")]
fn done_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    count_is(world, TaskStatus::Done, count)
}

#[then("the deleted count is {count:usize}")]
fn deleted_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    count_is(world, TaskStatus::Deleted, count)
}

#[then("the addition is rejected")]
fn addition_is_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_added
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing addition result"))?;

    if !matches!(
        result,
        Err(TaskBoardError::Domain(TaskDomainError::EmptyDescription))
    ) {
        return Err(eyre::eyre!("expected EmptyDescription error, got {result:?}"));
    }
    Ok(())
}

#[then("the request is ignored")]
fn request_is_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .ok_or_else(|| eyre::eyre!("missing transition outcome"))?;

    if outcome != TransitionOutcome::Ignored {
        return Err(eyre::eyre!("expected Ignored outcome, got {outcome:?}"));
    }
    Ok(())
}

#[then(r#"the to-do column lists "{description}""#)]
fn todo_column_lists(world: &BoardWorld, description: String) -> Result<(), eyre::Report> {
    let snapshot = world.service.snapshot();
    let listed = snapshot
        .todo
        .iter()
        .any(|task| task.description().as_str() == description);
    if !listed {
        return Err(eyre::eyre!(
            "expected to-do column to list {description:?}, snapshot was {snapshot:?}"
        ));
    }
    Ok(())
}

#[then("the bulk move count is {count:usize}")]
fn bulk_move_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world
        .last_bulk_count
        .ok_or_else(|| eyre::eyre!("missing bulk move count"))?;
    if actual != count {
        return Err(eyre::eyre!("expected bulk move count {count}, found {actual}"));
    }
    Ok(())
}
