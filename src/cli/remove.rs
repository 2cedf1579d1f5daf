//! `td remove` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{Storage, TaskStore};

#[derive(Args)]
pub struct RemoveArgs {
    /// Task to remove (id, id prefix, or exact title)
    identifier: String,
}

pub fn run(storage: Storage, args: RemoveArgs) -> Result<()> {
    let mut store = TaskStore::open(storage);
    let task = super::resolve_task(&args.identifier, store.tasks())?;
    let id = task.id.clone();
    let title = task.title.clone();

    store.delete(&id)?;

    println!("✓ Removed task: {}", title);

    Ok(())
}
