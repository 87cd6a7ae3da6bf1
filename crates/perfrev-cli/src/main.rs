//! perfrev CLI
//!
//! Command-line interface for the employee review store

use clap::{Parser, Subcommand};
use perfrev_core::logging::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "perfrev")]
#[command(about = "perfrev - employee review persistence", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, default_value = ".perfrev/store.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the database schema
    Init,
    /// Employee operations
    Employee(commands::employee::EmployeeArgs),
    /// Review operations
    Review(commands::review::ReviewArgs),
}

fn main() {
    logging::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli.db),
        Commands::Employee(args) => commands::employee::execute(&cli.db, args),
        Commands::Review(args) => commands::review::execute(&cli.db, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
