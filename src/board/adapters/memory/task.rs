//! In-memory task repository backing the board for the process lifetime.

use std::collections::HashMap;

use crate::board::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// In-memory task repository.
///
/// Tasks live in a `Vec` in insertion order; a position index keyed by task
/// ID serves point lookups. Because tasks are never removed, positions stay
/// valid for the life of the repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    id_index: HashMap<TaskId, usize>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn store(&mut self, task: &Task) -> TaskRepositoryResult<()> {
        if self.id_index.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        self.id_index.insert(task.id(), self.tasks.len());
        self.tasks.push(task.clone());
        Ok(())
    }

    fn update(&mut self, task: &Task) -> TaskRepositoryResult<()> {
        let position = self
            .id_index
            .get(&task.id())
            .copied()
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        let slot = self
            .tasks
            .get_mut(position)
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.id_index
            .get(&id)
            .and_then(|position| self.tasks.get(*position))
            .cloned()
    }

    fn list_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect()
    }

    fn count_by_status(&self, status: TaskStatus) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .count()
    }
}
