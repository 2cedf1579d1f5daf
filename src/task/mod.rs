//! Task management module
//!
//! The task list lives in memory inside [`TaskStore`] and is mirrored to a
//! single JSON file after every mutating operation.

pub mod model;
pub mod storage;
pub mod store;

pub use model::{Priority, Task};
pub use storage::{Storage, StorageError};
pub use store::TaskStore;

use std::path::PathBuf;

/// Directory name under the user's home for app data.
const DATA_DIR: &str = ".taskdeck";

/// Resolve the app data directory, creating it if needed.
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    let home = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
    let data_dir = home.join(DATA_DIR);
    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}
