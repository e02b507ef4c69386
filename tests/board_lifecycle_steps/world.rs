//! Shared world state for task board lifecycle BDD scenarios.

use std::collections::HashMap;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    services::{TaskBoardError, TaskBoardService, TransitionOutcome},
};

/// Service type used by the BDD world.
pub type TestBoardService = TaskBoardService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub task_ids: HashMap<String, TaskId>,
    pub last_added: Option<Result<TaskId, TaskBoardError>>,
    pub last_outcome: Option<TransitionOutcome>,
    pub last_bulk_count: Option<usize>,
}

impl BoardWorld {
    /// Creates a world with an empty board and no pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskBoardService::new(InMemoryTaskRepository::new(), DefaultClock),
            task_ids: HashMap::new(),
            last_added: None,
            last_outcome: None,
            last_bulk_count: None,
        }
    }

    /// Looks up the id recorded for a previously added description.
    pub fn task_id(&self, description: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(description)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task recorded for description {description:?}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
