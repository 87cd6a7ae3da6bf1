use serde::Serialize;

use crate::errors::Result;

/// Employee - the collaborator reviews reference by primary key
///
/// Reviews relate many-to-one to employees via `employee_id`. Only the
/// surface that collaboration needs lives here: the record itself and the
/// lookup capability used when a review's employee reference is validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    /// Primary key; None until the row is inserted
    pub id: Option<i64>,

    /// Display name
    pub name: String,
}

impl Employee {
    /// Create a new unpersisted employee
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Check if this employee has an assigned primary key
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Lookup capability for employee existence checks
///
/// Employee-reference validation is a pure function of the value and the
/// lookup result; implementations decide where the lookup goes (the
/// employees table in production, an in-memory set in tests).
pub trait EmployeeDirectory {
    /// Check whether an employee with the given primary key exists
    ///
    /// # Errors
    /// Returns a persistence error if the underlying lookup fails.
    fn exists(&self, employee_id: i64) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee() {
        let employee = Employee::new("Kai");

        assert_eq!(employee.id, None);
        assert_eq!(employee.name, "Kai");
        assert!(!employee.is_persisted());
    }
}
