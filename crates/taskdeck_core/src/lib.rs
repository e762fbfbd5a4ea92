//! Core domain logic for the taskdeck task board.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod reorder;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{FilterConfig, FilterPatch, PriorityFilter, SortBy, StatusFilter};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskStatus, TaskValidationError};
pub use reorder::{move_item, reconcile_visible_order};
pub use storage::{JsonFileStorage, MemoryStorage, StorageError, StorageResult, TaskStorage};
pub use store::TaskStore;
pub use view::project;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
