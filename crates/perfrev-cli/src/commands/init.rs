//! Schema initialization command
//!
//! Usage: perfrev init [--db <PATH>]

use std::error::Error;
use std::path::Path;

/// Execute init
pub fn execute(db: &Path) -> Result<(), Box<dyn Error>> {
    let _conn = super::open_db(db)?;
    println!("✓ Schema ready at {}", db.display());

    Ok(())
}
