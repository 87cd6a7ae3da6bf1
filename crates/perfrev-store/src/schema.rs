//! Whole-schema convenience helpers
//!
//! Table DDL lives on each repository; these helpers apply it in
//! dependency order (employees before reviews, reversed on drop).

use perfrev_core::Result;
use rusqlite::Connection;

use crate::repo::{EmployeeRepo, ReviewRepo};

/// Create both tables (idempotent)
///
/// # Errors
/// Returns a persistence error if any DDL statement fails.
pub fn create_all(conn: &Connection) -> Result<()> {
    EmployeeRepo::create_table(conn)?;
    ReviewRepo::create_table(conn)?;

    Ok(())
}

/// Drop both tables (idempotent)
///
/// # Errors
/// Returns a persistence error if any DDL statement fails.
pub fn drop_all(conn: &Connection) -> Result<()> {
    ReviewRepo::drop_table(conn)?;
    EmployeeRepo::drop_table(conn)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_all_idempotent() {
        let conn = crate::db::open_in_memory().unwrap();

        create_all(&conn).unwrap();
        create_all(&conn).unwrap();
        drop_all(&conn).unwrap();
        drop_all(&conn).unwrap();
    }
}
