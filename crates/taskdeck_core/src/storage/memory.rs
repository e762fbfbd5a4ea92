//! In-memory storage backend.
//!
//! # Responsibility
//! - Provide a backend-free storage adapter for tests and throwaway
//!   sessions.
//!
//! # Invariants
//! - Clones share the same underlying list, so a cloned handle observes
//!   every save made through the store.

use super::{StorageResult, TaskStorage};
use crate::model::task::Task;
use std::cell::RefCell;
use std::rc::Rc;

/// Task storage held entirely in memory.
///
/// Cloning yields a second handle onto the same stored list; tests keep a
/// clone to observe what the store persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    tasks: Rc<RefCell<Vec<Task>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-seeded with an existing task list.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Rc::new(RefCell::new(tasks)),
        }
    }

    /// Snapshot of the currently persisted list.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
