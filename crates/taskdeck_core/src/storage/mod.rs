//! Persistence adapters for the task list.
//!
//! # Responsibility
//! - Define the storage contract the task store writes through.
//! - Isolate blob/file details from store state transitions.
//!
//! # Invariants
//! - `load` yields an empty list for absent or undecodable data; only
//!   genuine I/O failures surface as errors.
//! - `save` always persists the full list in wire order.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level failure for task persistence.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "task storage i/o failed: {err}"),
            Self::Serde(err) => write!(f, "task storage encoding failed: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Write-through persistence contract for the task list.
///
/// The store calls `save` synchronously after every mutation that changes
/// list content or order; `load` runs once when a store is opened.
pub trait TaskStorage {
    /// Loads the persisted task list.
    ///
    /// # Contract
    /// - Absent prior data yields `Ok` with an empty list.
    /// - An undecodable blob yields `Ok` with an empty list (logged at
    ///   warn level), never an error.
    fn load(&self) -> StorageResult<Vec<Task>>;

    /// Persists the full task list, replacing any previous blob.
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}
