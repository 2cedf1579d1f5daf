//! `td list` command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::task::{Storage, Task, TaskStore};

const TABLE_COL_TITLE: usize = 30;
const TABLE_COL_DUE: usize = 10;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_ID_DISPLAY: usize = 12;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Sort the list before printing (the new order is saved)
    #[arg(long, value_enum)]
    sort: Option<SortOrder>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortOrder {
    /// Ascending priority, low first
    Priority,
    /// Ascending due date, earliest first
    Due,
}

#[derive(Serialize)]
struct TaskJson {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    due: chrono::NaiveDate,
    priority: String,
    completed: bool,
}

fn print_table_header() {
    println!(
        "{:<width_title$} {:<width_due$} {:<width_pri$} ID",
        "TITLE",
        "DUE",
        "PRI",
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE,
        width_pri = TABLE_COL_PRIORITY
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_TITLE + TABLE_COL_DUE + TABLE_COL_PRIORITY + TABLE_COL_ID_DISPLAY + 3)
    );
}

fn print_table_row(task: &Task) {
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let id_display = super::truncate_id(&task.id, TABLE_COL_ID_DISPLAY);
    println!(
        "{:<width_title$} {:<width_due$} {:<width_pri$} {}",
        title,
        task.due.format("%Y-%m-%d").to_string(),
        task.priority.label(),
        id_display,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE,
        width_pri = TABLE_COL_PRIORITY
    );
}

pub fn run(storage: Storage, args: ListArgs) -> Result<()> {
    let mut store = TaskStore::open(storage);

    match args.sort {
        Some(SortOrder::Priority) => store.sort_by_priority()?,
        Some(SortOrder::Due) => store.sort_by_due_date()?,
        None => {}
    }

    if store.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    if args.json {
        let tasks: Vec<TaskJson> = store
            .tasks()
            .iter()
            .map(|task| TaskJson {
                id: task.id.clone(),
                title: task.title.clone(),
                description: task.description.clone(),
                due: task.due,
                priority: task.priority.label().to_string(),
                completed: task.completed,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    print_table_header();
    for task in store.tasks() {
        print_table_row(task);
    }
    println!("\nTotal: {} tasks", store.len());

    Ok(())
}
