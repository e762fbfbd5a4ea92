//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted as the storage blob.
//! - Provide creation helpers stamping identity and timestamps.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is set once at creation and never changes.
//! - `created_at <= updated_at` for every live task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Completed,
}

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used by the priority sort: high > medium > low.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Canonical task record.
///
/// Field names follow the persisted wire layout: camelCase keys with
/// RFC 3339 timestamp strings and kebab-case status values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID, assigned at creation and immutable thereafter.
    pub id: TaskId,
    /// Non-empty display title.
    pub title: String,
    /// Free-form body text; may be empty.
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from a draft with a generated stable ID.
    ///
    /// # Invariants
    /// - `created_at == updated_at` at creation time.
    pub fn new(draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self::with_id(Uuid::new_v4(), draft, now, now)
    }

    /// Creates a task with caller-provided identity and timestamps.
    ///
    /// Used by import paths and test fixtures where identity and history
    /// already exist externally.
    pub fn with_id(
        id: TaskId,
        draft: TaskDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at,
            updated_at,
        }
    }

    /// Refreshes `updated_at` to the current instant.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Creation input for a task: everything but identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
}

impl TaskDraft {
    /// Validates presentation-layer input before it reaches the store.
    ///
    /// The store itself accepts drafts as-is; callers are expected to run
    /// this check first.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }
}

/// Validation failures for task drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming whitespace.
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}
