//! In-memory task list with write-through persistence

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::warn;

use super::{Priority, Storage, Task};

/// Replacement values for an update. All four user-editable fields are
/// supplied together; the store does not merge partial changes.
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
    pub priority: Priority,
}

/// Owns the task sequence and keeps it mirrored to durable storage.
///
/// Every mutating operation completes its file write before returning, so
/// a reload (or another process start) always observes the latest state.
/// When the write fails the in-memory mutation is kept and the error is
/// returned for reporting; the next successful mutation rewrites the whole
/// file and brings storage back in sync.
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store, loading the persisted list exactly once. A missing
    /// file is an empty list; unreadable or corrupt contents also degrade
    /// to an empty list, with a diagnostic instead of an error.
    pub fn open(storage: Storage) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(
                    "Could not load {}: {} (starting with an empty list)",
                    storage.path().display(),
                    e
                );
                Vec::new()
            }
        };
        Self { storage, tasks }
    }

    /// The current task sequence, in display order.
    ///
    /// This is a borrowed view of the live list, not a snapshot; re-borrow
    /// after any mutating call to observe the new state.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task to the end of the list and persist.
    pub fn add(&mut self, task: Task) -> Result<()> {
        self.tasks.push(task);
        self.persist()
    }

    /// Replace the user-editable fields of the task with the given id, in
    /// place (list position is preserved), and persist. Returns `false`
    /// when no task has that id; the file is rewritten either way.
    pub fn update(&mut self, id: &str, fields: TaskFields) -> Result<bool> {
        let found = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = fields.title;
                task.description = fields.description;
                task.due = fields.due;
                task.priority = fields.priority;
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(found)
    }

    /// Remove the first task with the given id and persist. Deleting an
    /// unknown id leaves the list unchanged; the file is rewritten either
    /// way.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(removed)
    }

    /// Stable ascending sort by priority (low first), persisted.
    pub fn sort_by_priority(&mut self) -> Result<()> {
        self.tasks.sort_by_key(|t| t.priority);
        self.persist()
    }

    /// Stable ascending sort by due date (earliest first), persisted.
    pub fn sort_by_due_date(&mut self) -> Result<()> {
        self.tasks.sort_by_key(|t| t.due);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.storage
            .save(&self.tasks)
            .with_context(|| format!("failed to save {}", self.storage.path().display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, due: NaiveDate, priority: Priority) -> Task {
        Task::new(title, "", due, priority)
    }

    fn open_at(dir: &std::path::Path) -> TaskStore {
        TaskStore::open(Storage::at(dir.join("tasks.json")))
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let store = open_at(temp.path());
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_corrupt_file_is_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tasks.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = TaskStore::open(Storage::at(path));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let temp = tempdir().unwrap();
        let mut store = open_at(temp.path());

        store
            .add(task("first", date(2024, 1, 1), Priority::Low))
            .unwrap();
        store
            .add(task("second", date(2024, 1, 2), Priority::High))
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[1].title, "second");

        // A fresh store on the same file observes the mutation.
        let reloaded = open_at(temp.path());
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.tasks()[0].title, "first");
    }

    #[test]
    fn test_update_mutates_in_place() {
        let temp = tempdir().unwrap();
        let mut store = open_at(temp.path());

        store
            .add(task("one", date(2024, 1, 1), Priority::Low))
            .unwrap();
        store
            .add(task("two", date(2024, 1, 2), Priority::Low))
            .unwrap();
        store
            .add(task("three", date(2024, 1, 3), Priority::Low))
            .unwrap();

        let id = store.tasks()[1].id.clone();
        let updated = store
            .update(
                &id,
                TaskFields {
                    title: "two (revised)".to_string(),
                    description: "now with notes".to_string(),
                    due: date(2024, 2, 2),
                    priority: Priority::High,
                },
            )
            .unwrap();

        assert!(updated);
        // Position preserved, fields replaced.
        let t = &store.tasks()[1];
        assert_eq!(t.id, id);
        assert_eq!(t.title, "two (revised)");
        assert_eq!(t.description, "now with notes");
        assert_eq!(t.due, date(2024, 2, 2));
        assert_eq!(t.priority, Priority::High);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let temp = tempdir().unwrap();
        let mut store = open_at(temp.path());

        store
            .add(task("only", date(2024, 1, 1), Priority::Medium))
            .unwrap();
        let before = store.tasks().to_vec();

        let updated = store
            .update(
                "does-not-exist",
                TaskFields {
                    title: "x".to_string(),
                    description: String::new(),
                    due: date(2024, 1, 1),
                    priority: Priority::Low,
                },
            )
            .unwrap();

        assert!(!updated);
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_delete_by_id_among_identical_tasks() {
        let temp = tempdir().unwrap();
        let mut store = open_at(temp.path());

        // Two tasks with identical fields, distinct ids.
        let a = task("laundry", date(2024, 1, 1), Priority::Low);
        let b = task("laundry", date(2024, 1, 1), Priority::Low);
        let a_id = a.id.clone();
        let b_id = b.id.clone();
        store.add(a).unwrap();
        store.add(b).unwrap();

        let removed = store.delete(&a_id).unwrap();
        assert!(removed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].id, b_id);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let temp = tempdir().unwrap();
        let mut store = open_at(temp.path());

        store
            .add(task("keep", date(2024, 1, 1), Priority::Medium))
            .unwrap();

        let removed = store.delete("missing").unwrap();
        assert!(!removed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sort_by_priority_is_stable() {
        let temp = tempdir().unwrap();
        let mut store = open_at(temp.path());

        store
            .add(task("h1", date(2024, 1, 5), Priority::High))
            .unwrap();
        store
            .add(task("l1", date(2024, 1, 1), Priority::Low))
            .unwrap();
        store
            .add(task("h2", date(2024, 1, 2), Priority::High))
            .unwrap();

        store.sort_by_priority().unwrap();

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        // Low first; the two highs keep their original relative order.
        assert_eq!(titles, vec!["l1", "h1", "h2"]);
    }

    #[test]
    fn test_sort_by_due_date() {
        let temp = tempdir().unwrap();
        let mut store = open_at(temp.path());

        store
            .add(task("h1", date(2024, 1, 5), Priority::High))
            .unwrap();
        store
            .add(task("l1", date(2024, 1, 1), Priority::Low))
            .unwrap();
        store
            .add(task("h2", date(2024, 1, 2), Priority::High))
            .unwrap();

        store.sort_by_due_date().unwrap();

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["l1", "h2", "h1"]);
    }

    #[test]
    fn test_sorted_order_survives_reopen() {
        let temp = tempdir().unwrap();
        let mut store = open_at(temp.path());

        store
            .add(task("later", date(2024, 3, 1), Priority::Low))
            .unwrap();
        store
            .add(task("sooner", date(2024, 1, 1), Priority::Low))
            .unwrap();
        store.sort_by_due_date().unwrap();

        let reloaded = open_at(temp.path());
        assert_eq!(reloaded.tasks()[0].title, "sooner");
        assert_eq!(reloaded.tasks()[1].title, "later");
    }

    #[test]
    fn test_write_failure_keeps_in_memory_mutation() {
        // Point at a file inside a directory that doesn't exist so every
        // save fails.
        let mut store = TaskStore::open(Storage::at("/nonexistent-taskdeck-dir/tasks.json"));

        let result = store.add(task("doomed", date(2024, 1, 1), Priority::Low));
        assert!(result.is_err());

        // The mutation is not rolled back.
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "doomed");
    }
}
