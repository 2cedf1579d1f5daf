//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Task priority, ascending. Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse priority from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "med" | "m" => Some(Self::Medium),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }

    /// Get the label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// All priorities, in ascending order. Used by selector widgets.
    pub fn all() -> &'static [Priority] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One to-do item.
///
/// Plain data holder: all fields are public and no validation happens here.
/// Callers (the CLI argument parser, the TUI form) guard against empty
/// titles and missing dates before construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID, assigned at creation. Update and delete key on this.
    pub id: String,

    /// Task title
    pub title: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// Due date (calendar date, no time component)
    pub due: NaiveDate,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Completion flag. Nothing in the app currently sets this; it is kept
    /// in the schema and shown in detail views.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(title: &str, description: &str, due: NaiveDate, priority: Priority) -> Self {
        Self {
            id: generate_id(),
            title: title.to_string(),
            description: description.to_string(),
            due,
            priority,
            completed: false,
        }
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string().replace("-", "")[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("MED"), Some(Priority::Medium));
        assert_eq!(Priority::parse(" high "), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_priority_label_roundtrip() {
        for p in Priority::all() {
            assert_eq!(Priority::parse(p.label()), Some(*p));
        }
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk", "", date(2024, 1, 5), Priority::Medium);
        assert_eq!(task.title, "Buy milk");
        assert!(task.description.is_empty());
        assert!(!task.completed);
        assert_eq!(task.id.len(), 16);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("a", "", date(2024, 1, 1), Priority::Low);
        let b = Task::new("a", "", date(2024, 1, 1), Priority::Low);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_equal_fields_distinct_ids() {
        // Two tasks with identical user-visible fields are still
        // distinguishable through their ids.
        let a = Task::new("Pay rent", "transfer", date(2024, 2, 1), Priority::High);
        let b = Task::new("Pay rent", "transfer", date(2024, 2, 1), Priority::High);
        assert_ne!(a, b);
        assert_eq!(a.title, b.title);
    }
}
