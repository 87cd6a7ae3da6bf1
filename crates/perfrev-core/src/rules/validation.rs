//! Attribute validation rules
//!
//! Each rule is a pure function of the value (and, for employee references,
//! the lookup result). Rules never reach for ambient collaborators; callers
//! pass the directory capability in.

use crate::errors::{PerfRevError, Result};
use crate::model::EmployeeDirectory;

/// Earliest year a review may cover
pub const MIN_YEAR: i32 = 2000;

/// Validate a review year
///
/// # Errors
/// Returns `InvalidYear` if the year is below 2000.
pub fn validate_year(year: i32) -> Result<()> {
    if year >= MIN_YEAR {
        Ok(())
    } else {
        Err(PerfRevError::InvalidYear { year })
    }
}

/// Validate a review summary
///
/// The check runs on the whitespace-trimmed form; callers store the
/// untrimmed original.
///
/// # Errors
/// Returns `InvalidSummary` if the trimmed form is empty.
pub fn validate_summary(summary: &str) -> Result<()> {
    if summary.trim().is_empty() {
        Err(PerfRevError::InvalidSummary)
    } else {
        Ok(())
    }
}

/// Validate an employee reference against the directory
///
/// # Errors
/// Returns `UnknownEmployee` if the directory has no employee with that
/// primary key, or a persistence error if the lookup itself fails.
pub fn validate_employee_ref(
    employee_id: i64,
    directory: &dyn EmployeeDirectory,
) -> Result<()> {
    if directory.exists(employee_id)? {
        Ok(())
    } else {
        Err(PerfRevError::UnknownEmployee { employee_id })
    }
}
