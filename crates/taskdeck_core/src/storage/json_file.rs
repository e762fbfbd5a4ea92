//! JSON file storage backend.
//!
//! # Responsibility
//! - Persist the task list as a single JSON array blob on disk.
//! - Keep the on-disk blob valid across interrupted writes.
//!
//! # Invariants
//! - Writes go through a sibling temp file and an atomic rename, so the
//!   blob is never left truncated.
//! - A missing or undecodable blob reads as an empty list.

use super::{StorageResult, TaskStorage};
use crate::model::task::Task;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Task storage backed by one JSON file holding the serialized task array.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Vec<Task>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=storage_load module=storage status=ok path={} mode=empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                debug!(
                    "event=storage_load module=storage status=ok path={} count={}",
                    self.path.display(),
                    tasks.len()
                );
                Ok(tasks)
            }
            Err(err) => {
                // Undecodable state counts as "no prior data" rather than a
                // fatal condition; the blob is replaced on the next save.
                warn!(
                    "event=storage_load module=storage status=degraded path={} error_code=blob_decode_failed error={}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let blob = serde_json::to_string(tasks)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, blob)?;
        fs::rename(&temp_path, &self.path)?;

        debug!(
            "event=storage_save module=storage status=ok path={} count={}",
            self.path.display(),
            tasks.len()
        );
        Ok(())
    }
}
