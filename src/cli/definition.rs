//! Command-line interface definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::{add, edit, list, remove, show};

#[derive(Parser)]
#[command(name = "td", version, about = "Terminal to-do list manager")]
pub struct Cli {
    /// Task file to use instead of ~/.taskdeck/tasks.json
    #[arg(long, global = true, env = "TASKDECK_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(add::AddArgs),

    /// List tasks
    List(list::ListArgs),

    /// Show one task in full
    Show(show::ShowArgs),

    /// Edit a task's fields
    Edit(edit::EditArgs),

    /// Remove a task
    Remove(remove::RemoveArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
