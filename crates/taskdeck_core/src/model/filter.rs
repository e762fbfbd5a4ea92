//! View filter configuration.
//!
//! # Responsibility
//! - Describe which tasks the projection keeps and how it sorts them.
//! - Support partial updates merged over the current configuration.
//!
//! # Invariants
//! - Filter state is transient: it is never persisted and resets to
//!   defaults whenever a store is opened.

use crate::model::task::{Priority, TaskStatus};

/// Status dimension of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    InProgress,
    Completed,
}

impl StatusFilter {
    /// Returns whether a task with the given status passes this filter.
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Todo => status == TaskStatus::Todo,
            Self::InProgress => status == TaskStatus::InProgress,
            Self::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Priority dimension of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    /// Returns whether a task with the given priority passes this filter.
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Low => priority == Priority::Low,
            Self::Medium => priority == Priority::Medium,
            Self::High => priority == Priority::High,
        }
    }
}

/// Sort mode applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Most recently created first.
    #[default]
    Date,
    /// Highest priority rank first.
    Priority,
}

/// Active filter and sort configuration for the view projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterConfig {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub sort_by: SortBy,
}

impl FilterConfig {
    /// Merges the set fields of a patch into this configuration.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
    }
}

/// Partial filter update; `None` fields leave the current value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub status: Option<StatusFilter>,
    pub priority: Option<PriorityFilter>,
    pub sort_by: Option<SortBy>,
}
