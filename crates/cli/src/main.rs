//! Registro CLI - participant registration for Sociedad Científica events
//!
//! Usage:
//!   registro                       - Start interactive mode
//!   registro add-user              - Register a new participant
//!   registro list-users            - Show all participants
//!   registro delete-user <email>   - Remove a participant (admin)
//!   registro export-excel          - Export participants to a spreadsheet (admin)
//!   registro stats                 - Category statistics (admin)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use auth::Session;
use cli::commands::{
    AddUserCommand, DeleteUserCommand, ExportExcelCommand, ListUsersCommand, StatsCommand,
};
use cli::interactive::InteractiveCli;
use shared::DataPaths;

#[derive(Parser)]
#[command(name = "registro")]
#[command(about = "Participant registration for Sociedad Científica events")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the persisted collections
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new participant
    AddUser(AddUserCommand),
    /// Show all registered participants
    ListUsers(ListUsersCommand),
    /// Remove a participant by email (admin only)
    DeleteUser(DeleteUserCommand),
    /// Export all participants to an Excel spreadsheet (admin only)
    ExportExcel(ExportExcelCommand),
    /// Show registration counts per category (admin only)
    Stats(StatsCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let paths = match cli.data_dir {
        Some(dir) => DataPaths::new(dir),
        None => DataPaths::from_env(),
    };

    // One session per process; privileged commands authenticate at most once.
    let mut session = Session::new();

    match cli.command {
        Some(Commands::AddUser(cmd)) => cmd.run(&paths),
        Some(Commands::ListUsers(cmd)) => cmd.run(&paths),
        Some(Commands::DeleteUser(cmd)) => cmd.run(&paths, &mut session),
        Some(Commands::ExportExcel(cmd)) => cmd.run(&paths, &mut session),
        Some(Commands::Stats(cmd)) => cmd.run(&paths, &mut session),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(paths);
            interactive.run()
        }
    }
}
