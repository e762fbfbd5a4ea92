//! View projection: the filtered, sorted slice of the board.
//!
//! # Responsibility
//! - Derive the displayed task sequence from the full list and the
//!   active filter configuration.
//!
//! # Invariants
//! - Pure and deterministic: identical inputs produce identical output,
//!   and the input list is never mutated.
//! - Both sort modes are stable, so ties keep their manual display order.

use crate::model::filter::{FilterConfig, SortBy};
use crate::model::task::Task;

/// Projects the task list through the filter into display order.
///
/// Filters by status, then by priority, then applies the configured sort:
/// most recently created first for `SortBy::Date`, highest rank first for
/// `SortBy::Priority`.
pub fn project(tasks: &[Task], filter: &FilterConfig) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.status.matches(task.status))
        .filter(|task| filter.priority.matches(task.priority))
        .cloned()
        .collect();

    match filter.sort_by {
        SortBy::Date => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Priority => visible.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
    }

    visible
}
