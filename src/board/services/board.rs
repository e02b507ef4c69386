//! Service layer for task creation, status transitions, and board queries.

use crate::board::{
    domain::{Description, Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use log::debug;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service-level errors for task board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Outcome of an id-addressed transition request.
///
/// Unknown identifiers and transitions the lifecycle forbids are not errors
/// at this boundary: a UI driven by stale identifiers (a double-click on a
/// row that already moved) must never crash the board, so such requests
/// report [`TransitionOutcome::Ignored`] and change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The task moved to the requested status.
    Applied,
    /// The request was a no-op; board state is unchanged.
    Ignored,
}

impl TransitionOutcome {
    /// Returns whether the transition was applied.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Render-ready view of the board's visible columns.
///
/// Deleted tasks are retained in the store but never part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Outstanding tasks, in insertion order.
    pub todo: Vec<Task>,
    /// Completed tasks, in insertion order.
    pub done: Vec<Task>,
}

impl BoardSnapshot {
    /// Returns the remaining-tasks counter.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.todo.len()
    }

    /// Returns the completed-tasks counter.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.done.len()
    }
}

/// Task board orchestration service.
///
/// Owns the task collection through its repository, mints identifiers from a
/// sequential counter of tasks ever created, applies the monotone status
/// lifecycle, and answers the queries a rendering host re-runs after every
/// mutation. All operations are synchronous and run to completion; a
/// multi-threaded host must serialise access externally.
#[derive(Debug, Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    repository: R,
    clock: C,
    minted: u64,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Creates a task board service over an empty repository.
    #[must_use]
    pub const fn new(repository: R, clock: C) -> Self {
        Self {
            repository,
            clock,
            minted: 0,
        }
    }

    /// Creates a new outstanding task from raw description input.
    ///
    /// The description is trimmed before validation; the new task receives a
    /// freshly minted identifier and joins the end of the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] with
    /// [`TaskDomainError::EmptyDescription`] when the description is blank;
    /// the board is left unchanged.
    pub fn add_task(&mut self, description: impl Into<String>) -> TaskBoardResult<TaskId> {
        let validated = Description::new(description)?;
        let id = TaskId::new(self.minted);
        let task = Task::new(id, validated, &self.clock);
        self.repository.store(&task)?;
        self.minted += 1;
        Ok(id)
    }

    /// Moves the identified task from `todo` to `done`.
    ///
    /// Unknown identifiers and tasks no longer in `todo` are ignored.
    pub fn complete_task(&mut self, id: TaskId) -> TransitionOutcome {
        self.transition_task(id, TaskStatus::Done)
    }

    /// Moves the identified task from `done` to `deleted`.
    ///
    /// Unknown identifiers and tasks not in `done` are ignored. The task
    /// stays in the store; deletion only hides it from the board.
    pub fn delete_task(&mut self, id: TaskId) -> TransitionOutcome {
        self.transition_task(id, TaskStatus::Deleted)
    }

    /// Moves every outstanding task to `done`, returning how many moved.
    ///
    /// Idempotent: a second call finds no outstanding tasks and returns 0.
    pub fn complete_all_tasks(&mut self) -> usize {
        self.transition_all(TaskStatus::Todo, TaskStatus::Done)
    }

    /// Moves every completed task to `deleted`, returning how many moved.
    ///
    /// Idempotent: a second call finds no completed tasks and returns 0.
    pub fn delete_all_tasks(&mut self) -> usize {
        self.transition_all(TaskStatus::Done, TaskStatus::Deleted)
    }

    /// Finds a task by identifier.
    ///
    /// Returns a cloned snapshot, or `None` when the task does not exist.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.repository.find_by_id(id)
    }

    /// Returns snapshots of all tasks with the given status, in insertion
    /// order.
    #[must_use]
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.repository.list_by_status(status)
    }

    /// Counts tasks with the given status.
    #[must_use]
    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.repository.count_by_status(status)
    }

    /// Returns the render-ready view of the board's visible columns.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            todo: self.repository.list_by_status(TaskStatus::Todo),
            done: self.repository.list_by_status(TaskStatus::Done),
        }
    }

    fn transition_task(&mut self, id: TaskId, target: TaskStatus) -> TransitionOutcome {
        match self.try_transition(id, target) {
            Ok(()) => TransitionOutcome::Applied,
            Err(err) => {
                debug!("ignoring {target} transition for {id}: {err}");
                TransitionOutcome::Ignored
            }
        }
    }

    fn try_transition(&mut self, id: TaskId, target: TaskStatus) -> TaskBoardResult<()> {
        let mut task = self
            .repository
            .find_by_id(id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.transition_to(target, &self.clock)?;
        self.repository.update(&task)?;
        Ok(())
    }

    fn transition_all(&mut self, from: TaskStatus, to: TaskStatus) -> usize {
        let mut applied = 0;
        for task in self.repository.list_by_status(from) {
            if self.transition_task(task.id(), to).is_applied() {
                applied += 1;
            }
        }
        applied
    }
}
