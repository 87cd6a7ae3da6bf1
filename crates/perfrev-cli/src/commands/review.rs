//! Review commands
//!
//! Usage: perfrev review add <YEAR> <SUMMARY> <EMPLOYEE_ID>
//!        perfrev review list [--json] | show <ID> [--json] | delete <ID>

use clap::{Args, Subcommand};
use std::error::Error;
use std::path::Path;

use perfrev_core::Review;
use perfrev_store::repo::{ReviewRepo, SqlDirectory};

#[derive(Debug, Args)]
pub struct ReviewArgs {
    #[command(subcommand)]
    pub command: ReviewCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Add a review for an employee
    Add(AddArgs),
    /// List reviews
    List(ListArgs),
    /// Show a single review
    Show(ShowArgs),
    /// Delete a review
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Review year (2000 or later)
    pub year: i32,

    /// Summary text
    pub summary: String,

    /// Primary key of the reviewed employee
    pub employee_id: i64,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Review primary key
    pub id: i64,

    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Review primary key
    pub id: i64,
}

/// Execute review command
pub fn execute(db: &Path, args: ReviewArgs) -> Result<(), Box<dyn Error>> {
    let conn = super::open_db(db)?;
    let mut repo = ReviewRepo::new();

    match args.command {
        ReviewCommand::Add(add) => {
            let directory = SqlDirectory::new(&conn);
            let review = repo.create(&conn, &directory, add.year, &add.summary, add.employee_id)?;
            println!("✓ Added review #{}", review.borrow().id.unwrap_or_default());
        }
        ReviewCommand::List(list) => {
            let reviews = repo.get_all(&conn)?;
            if list.json {
                let plain: Vec<Review> = reviews.iter().map(|r| r.borrow().clone()).collect();
                println!("{}", serde_json::to_string_pretty(&plain)?);
            } else {
                for review in &reviews {
                    let r = review.borrow();
                    println!(
                        "#{}  {}  employee #{}  {}",
                        r.id.unwrap_or_default(),
                        r.year(),
                        r.employee_id(),
                        r.summary()
                    );
                }
            }
        }
        ReviewCommand::Show(show) => match repo.find_by_id(&conn, show.id)? {
            Some(review) => {
                let r = review.borrow();
                if show.json {
                    println!("{}", serde_json::to_string_pretty(&*r)?);
                } else {
                    println!("Review #{}", r.id.unwrap_or_default());
                    println!("  year:     {}", r.year());
                    println!("  employee: #{}", r.employee_id());
                    println!("  summary:  {}", r.summary());
                }
            }
            None => return Err(format!("no review with id {}", show.id).into()),
        },
        ReviewCommand::Delete(delete) => match repo.find_by_id(&conn, delete.id)? {
            Some(review) => {
                repo.delete(&conn, &review)?;
                println!("✓ Deleted review #{}", delete.id);
            }
            None => return Err(format!("no review with id {}", delete.id).into()),
        },
    }

    Ok(())
}
