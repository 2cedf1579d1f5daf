//! `td show` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{Storage, TaskStore};

#[derive(Args)]
pub struct ShowArgs {
    /// Task to show (id, id prefix, or exact title)
    identifier: String,
}

pub fn run(storage: Storage, args: ShowArgs) -> Result<()> {
    let store = TaskStore::open(storage);
    let task = super::resolve_task(&args.identifier, store.tasks())?;

    println!("{}", task.title);
    println!("  ID:          {}", task.id);
    println!("  Due:         {}", task.due.format("%Y-%m-%d"));
    println!("  Priority:    {}", task.priority);
    println!(
        "  Completed:   {}",
        if task.completed { "yes" } else { "no" }
    );
    if !task.description.is_empty() {
        println!("  Description: {}", task.description);
    }

    Ok(())
}
