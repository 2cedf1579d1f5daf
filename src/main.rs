//! Taskdeck - terminal to-do list manager

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{self, Cli, Commands};
use taskdeck::tui;

fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completions don't touch storage.
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "td", &mut std::io::stdout());
        return Ok(());
    }

    let storage = cli::open_storage(cli.file.as_deref())?;

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(storage, args),
        Some(Commands::List(args)) => cli::list::run(storage, args),
        Some(Commands::Show(args)) => cli::show::run(storage, args),
        Some(Commands::Edit(args)) => cli::edit::run(storage, args),
        Some(Commands::Remove(args)) => cli::remove::run(storage, args),
        Some(Commands::Completion { .. }) => unreachable!(),
        None => tui::run(storage),
    }
}
