//! CLI command implementations

pub mod employee;
pub mod init;
pub mod review;

use rusqlite::Connection;
use std::error::Error;
use std::path::Path;

/// Open the database, creating its parent directory and schema as needed
///
/// Schema creation is idempotent, so every command can run it.
pub(crate) fn open_db(path: &Path) -> Result<Connection, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = perfrev_store::db::open(path)?;
    perfrev_store::schema::create_all(&conn)?;

    Ok(conn)
}
