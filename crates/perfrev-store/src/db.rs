//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use perfrev_core::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::errors::from_rusqlite;

/// Open a SQLite database at the given path
///
/// # Errors
/// Returns a persistence error if the file cannot be opened or configured.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite("open"))?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
///
/// # Errors
/// Returns a persistence error if the connection cannot be configured.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite("open_in_memory"))?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection
///
/// SQLite leaves foreign keys off per connection and the reviews table
/// declares one, so every connection enables them. The open helpers call
/// this automatically.
///
/// # Errors
/// Returns a persistence error if the pragma cannot be applied.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(from_rusqlite("configure"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_enables_foreign_keys() {
        let conn = open_in_memory().unwrap();

        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
