//! Employee repository and SQL-backed directory
//!
//! Reviews only need employees to exist; this module covers that minimum
//! surface: table lifecycle, insert, find-by-id, and the existence probe
//! used by employee-reference validation.

use perfrev_core::model::{Employee, EmployeeDirectory};
use perfrev_core::Result;
use rusqlite::{Connection, OptionalExtension};

use crate::errors::from_rusqlite;

/// SQLite repository for employees
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Create the employees table (idempotent)
    ///
    /// # Errors
    /// Returns a persistence error if the DDL fails.
    pub fn create_table(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS employees (
                id INTEGER PRIMARY KEY,
                name TEXT
            )",
            [],
        )
        .map_err(from_rusqlite("create_employees_table"))?;

        Ok(())
    }

    /// Drop the employees table (idempotent)
    ///
    /// # Errors
    /// Returns a persistence error if the DDL fails.
    pub fn drop_table(conn: &Connection) -> Result<()> {
        conn.execute("DROP TABLE IF EXISTS employees", [])
            .map_err(from_rusqlite("drop_employees_table"))?;

        Ok(())
    }

    /// Insert a new employee and capture the assigned primary key
    ///
    /// # Errors
    /// Returns a persistence error if the insert fails.
    pub fn create(conn: &Connection, name: &str) -> Result<Employee> {
        conn.execute(
            "INSERT INTO employees (name) VALUES (?1)",
            rusqlite::params![name],
        )
        .map_err(from_rusqlite("insert_employee"))?;

        let mut employee = Employee::new(name);
        employee.id = Some(conn.last_insert_rowid());
        tracing::debug!(employee_id = ?employee.id, "inserted employee");

        Ok(employee)
    }

    /// Find an employee by primary key
    ///
    /// # Errors
    /// Returns a persistence error if the query fails; an absent row is
    /// `Ok(None)`.
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Employee>> {
        let result = conn
            .query_row(
                "SELECT id, name FROM employees WHERE id = ?1",
                [id],
                |row| {
                    let id: i64 = row.get(0)?;
                    let name: String = row.get(1)?;

                    let mut employee = Employee::new(name);
                    employee.id = Some(id);
                    Ok(employee)
                },
            )
            .optional()
            .map_err(from_rusqlite("find_employee"))?;

        Ok(result)
    }

    /// List all employees in natural row order
    ///
    /// # Errors
    /// Returns a persistence error if the query fails.
    pub fn get_all(conn: &Connection) -> Result<Vec<Employee>> {
        let mut stmt = conn
            .prepare("SELECT id, name FROM employees")
            .map_err(from_rusqlite("list_employees"))?;

        let employees = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                let name: String = row.get(1)?;

                let mut employee = Employee::new(name);
                employee.id = Some(id);
                Ok(employee)
            })
            .map_err(from_rusqlite("list_employees"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite("list_employees"))?;

        Ok(employees)
    }
}

/// Employee existence checks backed by the employees table
///
/// Borrow one wherever a review constructor or setter needs the
/// [`EmployeeDirectory`] capability.
pub struct SqlDirectory<'c> {
    conn: &'c Connection,
}

impl<'c> SqlDirectory<'c> {
    /// Wrap an open connection
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeDirectory for SqlDirectory<'_> {
    fn exists(&self, employee_id: i64) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM employees WHERE id = ?1",
                [employee_id],
                |_| Ok(()),
            )
            .optional()
            .map_err(from_rusqlite("employee_exists"))?;

        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Connection {
        let conn = crate::db::open_in_memory().unwrap();
        EmployeeRepo::create_table(&conn).unwrap();
        conn
    }

    #[test]
    fn test_create_and_find_employee() {
        let conn = setup_test_db();

        let employee = EmployeeRepo::create(&conn, "Kai").unwrap();
        let id = employee.id.expect("id should be assigned");

        let found = EmployeeRepo::find_by_id(&conn, id)
            .unwrap()
            .expect("employee should exist");
        assert_eq!(found.name, "Kai");
        assert_eq!(found.id, Some(id));

        assert!(EmployeeRepo::find_by_id(&conn, id + 100).unwrap().is_none());
    }

    #[test]
    fn test_directory_reports_existence() {
        let conn = setup_test_db();
        let employee = EmployeeRepo::create(&conn, "Noor").unwrap();

        let directory = SqlDirectory::new(&conn);
        assert!(directory.exists(employee.id.unwrap()).unwrap());
        assert!(!directory.exists(999).unwrap());
    }

    #[test]
    fn test_create_table_idempotent() {
        let conn = setup_test_db();
        EmployeeRepo::create_table(&conn).unwrap();
        EmployeeRepo::drop_table(&conn).unwrap();
        EmployeeRepo::drop_table(&conn).unwrap();
    }
}
