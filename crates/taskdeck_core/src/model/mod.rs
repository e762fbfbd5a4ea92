//! Domain model for the task board.
//!
//! # Responsibility
//! - Define the canonical task record and its wire shape.
//! - Define the transient filter configuration driving the view projection.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - The task list's order is the user-controlled display order; it is
//!   independent of any timestamp.

pub mod filter;
pub mod task;
