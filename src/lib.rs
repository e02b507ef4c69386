//! Taskboard: core task-state management for a two-column task tracker.
//!
//! This crate owns the ordered collection of tasks behind a ToDo/Done board,
//! assigns identifiers, performs status transitions, and answers the queries
//! a rendering layer re-runs after every mutation. Rendering itself is an
//! external collaborator and lives outside this crate.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Task creation, status transitions, and board queries

pub mod board;
