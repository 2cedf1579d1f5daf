//! `td edit` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::task::store::TaskFields;
use crate::task::{Priority, Storage, TaskStore};

#[derive(Args)]
pub struct EditArgs {
    /// Task to edit (id, id prefix, or exact title)
    identifier: String,

    /// New title
    #[arg(short = 't', long)]
    title: Option<String>,

    /// New description
    #[arg(short = 'd', long = "desc")]
    description: Option<String>,

    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<String>,

    /// New priority (low, medium, high)
    #[arg(short = 'p', long)]
    priority: Option<String>,
}

pub fn run(storage: Storage, args: EditArgs) -> Result<()> {
    let mut store = TaskStore::open(storage);
    let task = super::resolve_task(&args.identifier, store.tasks())?;
    let id = task.id.clone();

    // Omitted flags keep the current value; the store receives the full
    // replacement set.
    let title = match &args.title {
        Some(t) => {
            let t = t.trim();
            if t.is_empty() {
                bail!("Title must not be empty");
            }
            t.to_string()
        }
        None => task.title.clone(),
    };

    let description = match &args.description {
        Some(d) => d.trim().to_string(),
        None => task.description.clone(),
    };

    let due = match &args.due {
        Some(d) => super::parse_due(d)?,
        None => task.due,
    };

    let priority = match &args.priority {
        Some(p) => match Priority::parse(p) {
            Some(priority) => priority,
            None => bail!("Unknown priority: {} (expected low, medium or high)", p),
        },
        None => task.priority,
    };

    store.update(
        &id,
        TaskFields {
            title: title.clone(),
            description,
            due,
            priority,
        },
    )?;

    println!("✓ Updated task: {}", title);
    println!("  Due:      {}", due.format("%Y-%m-%d"));
    println!("  Priority: {}", priority);
    println!("  ID:       {}", id);

    Ok(())
}
