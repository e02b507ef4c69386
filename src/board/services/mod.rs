//! Application services for task board orchestration.

mod board;

pub use board::{BoardSnapshot, TaskBoardError, TaskBoardResult, TaskBoardService, TransitionOutcome};
