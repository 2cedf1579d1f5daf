//! `td add` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::task::{Priority, Storage, Task, TaskStore};

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Longer description
    #[arg(short = 'd', long = "desc", default_value = "")]
    description: String,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: String,

    /// Priority (low, medium, high)
    #[arg(short = 'p', long, default_value = "medium")]
    priority: String,
}

pub fn run(storage: Storage, args: AddArgs) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("Title must not be empty");
    }

    let due = super::parse_due(&args.due)?;

    let Some(priority) = Priority::parse(&args.priority) else {
        bail!(
            "Unknown priority: {} (expected low, medium or high)",
            args.priority
        );
    };

    let mut store = TaskStore::open(storage);
    let task = Task::new(title, args.description.trim(), due, priority);
    let id = task.id.clone();
    store.add(task)?;

    println!("✓ Added task: {}", title);
    println!("  Due:      {}", due.format("%Y-%m-%d"));
    println!("  Priority: {}", priority);
    println!("  ID:       {}", id);

    Ok(())
}
