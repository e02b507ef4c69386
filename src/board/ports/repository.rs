//! Repository port for the ordered task collection.

use crate::board::domain::{Task, TaskId, TaskStatus};
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Contract for the ordered, append-only task collection.
///
/// Tasks are appended once and updated in place; they are never removed, so
/// insertion order is stable for the life of the repository. The contract is
/// synchronous and carries no internal locking: exclusive access is the
/// caller's responsibility, expressed through `&mut self` on mutations.
pub trait TaskRepository {
    /// Appends a new task to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    fn store(&mut self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces the stored task with the same ID, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    fn update(&mut self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns a cloned snapshot, or `None` when the task does not exist.
    fn find_by_id(&self, id: TaskId) -> Option<Task>;

    /// Returns snapshots of all tasks with the given status, in insertion
    /// order.
    fn list_by_status(&self, status: TaskStatus) -> Vec<Task>;

    /// Counts tasks with the given status.
    ///
    /// Derived from [`TaskRepository::list_by_status`]; implementations may
    /// override with a cheaper count.
    fn count_by_status(&self, status: TaskStatus) -> usize {
        self.list_by_status(status).len()
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
