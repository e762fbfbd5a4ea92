//! Task store: the authoritative task list and filter state.
//!
//! # Responsibility
//! - Own the ordered task list and apply the five mutation operations.
//! - Write the full list through to storage after every content or order
//!   change.
//!
//! # Invariants
//! - Task ids are unique across the live list.
//! - List order is the user-controlled display order; mutations other
//!   than reorder preserve every surviving task's position.
//! - Filter changes never touch storage.

use crate::model::filter::{FilterConfig, FilterPatch};
use crate::model::task::{Task, TaskDraft, TaskId};
use crate::storage::{StorageResult, TaskStorage};
use crate::view::project;
use log::debug;

/// Authoritative store for the task board.
///
/// Generic over its storage seam so state transitions stay testable
/// without a real backend.
pub struct TaskStore<S: TaskStorage> {
    storage: S,
    tasks: Vec<Task>,
    filter: FilterConfig,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Opens a store over the given storage adapter.
    ///
    /// Loads the persisted list once; absent or undecodable prior data
    /// yields an empty board. The filter always starts at its defaults.
    pub fn open(storage: S) -> StorageResult<Self> {
        let tasks = storage.load()?;
        debug!(
            "event=store_open module=store status=ok count={}",
            tasks.len()
        );
        Ok(Self {
            storage,
            tasks,
            filter: FilterConfig::default(),
        })
    }

    /// The full task list in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The active filter configuration.
    pub fn filter(&self) -> FilterConfig {
        self.filter
    }

    /// The filtered, sorted view of the board.
    pub fn visible_tasks(&self) -> Vec<Task> {
        project(&self.tasks, &self.filter)
    }

    /// Creates a task from a draft and appends it to the end of the list.
    ///
    /// # Contract
    /// - Assigns a fresh id and `created_at == updated_at == now`.
    /// - The draft is taken as-is; input validation happens before this
    ///   call via `TaskDraft::validate`.
    pub fn add_task(&mut self, draft: TaskDraft) -> StorageResult<TaskId> {
        let task = Task::new(draft);
        let id = task.id;
        self.tasks.push(task);
        self.storage.save(&self.tasks)?;
        debug!("event=task_added module=store status=ok id={id}");
        Ok(id)
    }

    /// Replaces the task with the same id in place, refreshing
    /// `updated_at`.
    ///
    /// Returns `false` without touching storage when no task matches; an
    /// unknown id is a silent no-op, not an error.
    pub fn update_task(&mut self, mut task: Task) -> StorageResult<bool> {
        let Some(index) = self.tasks.iter().position(|entry| entry.id == task.id) else {
            debug!(
                "event=task_updated module=store status=skipped id={} reason=not_found",
                task.id
            );
            return Ok(false);
        };

        task.touch();
        let id = task.id;
        self.tasks[index] = task;
        self.storage.save(&self.tasks)?;
        debug!("event=task_updated module=store status=ok id={id}");
        Ok(true)
    }

    /// Removes the task with the given id, if present.
    ///
    /// Idempotent: a second call for the same id returns `false` and
    /// skips the storage write.
    pub fn delete_task(&mut self, id: TaskId) -> StorageResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_deleted module=store status=skipped id={id} reason=not_found");
            return Ok(false);
        }

        self.storage.save(&self.tasks)?;
        debug!("event=task_deleted module=store status=ok id={id}");
        Ok(true)
    }

    /// Replaces the whole list with a new display order.
    ///
    /// # Contract
    /// - The caller supplies a permutation of the current list (same set
    ///   of ids); the store does not re-check this. Reorder helpers in
    ///   `crate::reorder` produce conforming permutations.
    pub fn reorder_tasks(&mut self, new_order: Vec<Task>) -> StorageResult<()> {
        self.tasks = new_order;
        self.storage.save(&self.tasks)?;
        debug!(
            "event=tasks_reordered module=store status=ok count={}",
            self.tasks.len()
        );
        Ok(())
    }

    /// Merges a partial filter update into the active configuration.
    ///
    /// Filter state is transient; this never writes to storage.
    pub fn set_filter(&mut self, patch: FilterPatch) {
        self.filter.apply(patch);
        debug!("event=filter_set module=store status=ok filter={:?}", self.filter);
    }
}
