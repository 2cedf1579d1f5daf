//! CLI command implementations

pub mod add;
pub mod definition;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;

pub use definition::{Cli, Commands};

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use std::path::Path;

use crate::task::{Storage, Task};

/// Storage for this invocation: the `--file` override or the default
/// location.
pub fn open_storage(file: Option<&Path>) -> Result<Storage> {
    Ok(match file {
        Some(path) => Storage::at(path),
        None => Storage::new()?,
    })
}

pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    // Try exact ID match
    if let Some(task) = tasks.iter().find(|t| t.id == identifier) {
        return Ok(task);
    }

    // Try ID prefix match
    if let Some(task) = tasks.iter().find(|t| t.id.starts_with(identifier)) {
        return Ok(task);
    }

    // Try exact title match
    if let Some(task) = tasks.iter().find(|t| t.title == identifier) {
        return Ok(task);
    }

    bail!("Task not found: {}", identifier)
}

pub fn parse_due(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid due date: {} (expected YYYY-MM-DD)", s))
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else if max <= 3 {
        s[..max].to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}

pub fn truncate_id(id: &str, max_len: usize) -> &str {
    if id.len() > max_len {
        &id[..max_len]
    } else {
        id
    }
}
