//! Adapter implementations of the task board ports.

pub mod memory;
