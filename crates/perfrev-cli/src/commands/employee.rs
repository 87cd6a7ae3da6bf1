//! Employee commands
//!
//! Usage: perfrev employee add <NAME> | perfrev employee list [--json]

use clap::{Args, Subcommand};
use std::error::Error;
use std::path::Path;

use perfrev_store::repo::EmployeeRepo;

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// Add an employee
    Add(AddArgs),
    /// List employees
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Employee name
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Execute employee command
pub fn execute(db: &Path, args: EmployeeArgs) -> Result<(), Box<dyn Error>> {
    let conn = super::open_db(db)?;

    match args.command {
        EmployeeCommand::Add(add) => {
            let employee = EmployeeRepo::create(&conn, &add.name)?;
            println!(
                "✓ Added employee #{} ({})",
                employee.id.unwrap_or_default(),
                employee.name
            );
        }
        EmployeeCommand::List(list) => {
            let employees = EmployeeRepo::get_all(&conn)?;
            if list.json {
                println!("{}", serde_json::to_string_pretty(&employees)?);
            } else {
                for employee in &employees {
                    println!("#{}  {}", employee.id.unwrap_or_default(), employee.name);
                }
            }
        }
    }

    Ok(())
}
