//! Task storage - JSON file persistence

use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

use super::{get_data_dir, Task};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse task file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// File persistence for the task list.
///
/// The whole list is serialized as one JSON document; every save rewrites
/// the file after copying the previous contents to a `.bak` sibling.
pub struct Storage {
    tasks_path: PathBuf,
}

impl Storage {
    /// Storage at the default location (`~/.taskdeck/tasks.json`).
    pub fn new() -> Result<Self> {
        let data_dir = get_data_dir()?;
        Ok(Self {
            tasks_path: data_dir.join("tasks.json"),
        })
    }

    /// Storage at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: path.into(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.tasks_path
    }

    /// Load the full task list. A missing or blank file is an empty list;
    /// unreadable or unparseable contents are an error, which the store
    /// maps to an empty list with a diagnostic.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    /// Persist the full task list, replacing prior contents.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        // Create backup
        if self.tasks_path.exists() {
            let backup_path = self.tasks_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_path, content)?;
        Ok(())
    }
}
