use serde::Serialize;

use crate::errors::Result;
use crate::model::employee::EmployeeDirectory;
use crate::rules::validation;

/// Review - a yearly performance review for one employee
///
/// Attribute invariants hold on every assignment, not only at construction:
/// `year` must be at least 2000, `summary` must be non-empty after trimming
/// (the untrimmed original is what gets stored), and `employee_id` must
/// reference an existing employee at the time it is set. The employee check
/// runs against whatever [`EmployeeDirectory`] the caller passes in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// Primary key; None until the row is inserted, cleared again on deletion
    pub id: Option<i64>,

    year: i32,
    summary: String,
    employee_id: i64,
}

impl Review {
    /// Create a new unpersisted review, validating every attribute
    ///
    /// # Errors
    /// Fails with a validation error naming the violated rule if any
    /// attribute is invalid; the instance is never constructed in that case.
    pub fn new(
        year: i32,
        summary: impl Into<String>,
        employee_id: i64,
        directory: &dyn EmployeeDirectory,
    ) -> Result<Self> {
        let summary = summary.into();
        validation::validate_year(year)?;
        validation::validate_summary(&summary)?;
        validation::validate_employee_ref(employee_id, directory)?;

        Ok(Self {
            id: None,
            year,
            summary,
            employee_id,
        })
    }

    /// Rebuild a review from a stored row
    ///
    /// Runs the pure attribute rules as a consistency check but skips the
    /// directory lookup: stored references are guarded by the schema's
    /// foreign key.
    ///
    /// # Errors
    /// Fails if the stored year or summary violates its rule.
    pub fn restore(
        id: i64,
        year: i32,
        summary: impl Into<String>,
        employee_id: i64,
    ) -> Result<Self> {
        let summary = summary.into();
        validation::validate_year(year)?;
        validation::validate_summary(&summary)?;

        Ok(Self {
            id: Some(id),
            year,
            summary,
            employee_id,
        })
    }

    /// The review year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The summary text, exactly as assigned (untrimmed)
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Primary key of the reviewed employee
    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    /// Check if this review has an assigned primary key
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Set the review year
    ///
    /// # Errors
    /// Returns `InvalidYear` if the year is below 2000; the stored value is
    /// untouched on failure.
    pub fn set_year(&mut self, year: i32) -> Result<()> {
        validation::validate_year(year)?;
        self.year = year;
        Ok(())
    }

    /// Set the summary, storing the untrimmed original
    ///
    /// # Errors
    /// Returns `InvalidSummary` if the trimmed form is empty; the stored
    /// value is untouched on failure.
    pub fn set_summary(&mut self, summary: impl Into<String>) -> Result<()> {
        let summary = summary.into();
        validation::validate_summary(&summary)?;
        self.summary = summary;
        Ok(())
    }

    /// Set the employee reference, re-checking existence via the directory
    ///
    /// The check runs on every assignment, not only the first.
    ///
    /// # Errors
    /// Returns `UnknownEmployee` if the directory has no such employee, or
    /// a persistence error if the lookup fails.
    pub fn set_employee_id(
        &mut self,
        employee_id: i64,
        directory: &dyn EmployeeDirectory,
    ) -> Result<()> {
        validation::validate_employee_ref(employee_id, directory)?;
        self.employee_id = employee_id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PerfRevError;

    struct StaticDirectory(Vec<i64>);

    impl EmployeeDirectory for StaticDirectory {
        fn exists(&self, employee_id: i64) -> Result<bool> {
            Ok(self.0.contains(&employee_id))
        }
    }

    #[test]
    fn test_new_review() {
        let directory = StaticDirectory(vec![1]);
        let review = Review::new(2021, "Good work", 1, &directory).unwrap();

        assert_eq!(review.id, None);
        assert_eq!(review.year(), 2021);
        assert_eq!(review.summary(), "Good work");
        assert_eq!(review.employee_id(), 1);
        assert!(!review.is_persisted());
    }

    #[test]
    fn test_invalid_input_fails_construction() {
        let directory = StaticDirectory(vec![1]);

        assert_eq!(
            Review::new(1999, "x", 1, &directory),
            Err(PerfRevError::InvalidYear { year: 1999 })
        );
        assert_eq!(
            Review::new(2021, "", 1, &directory),
            Err(PerfRevError::InvalidSummary)
        );
        assert_eq!(
            Review::new(2021, "ok", 999, &directory),
            Err(PerfRevError::UnknownEmployee { employee_id: 999 })
        );
    }

    #[test]
    fn test_summary_kept_untrimmed() {
        let directory = StaticDirectory(vec![1]);
        let review = Review::new(2021, "  spaced out  ", 1, &directory).unwrap();

        assert_eq!(review.summary(), "  spaced out  ");
    }

    #[test]
    fn test_setters_enforce_rules_on_every_assignment() {
        let directory = StaticDirectory(vec![1, 2]);
        let mut review = Review::new(2020, "fine", 1, &directory).unwrap();

        review.set_year(2022).unwrap();
        assert_eq!(review.year(), 2022);
        assert!(review.set_year(1995).is_err());
        assert_eq!(review.year(), 2022);

        assert!(review.set_summary("   ").is_err());
        assert_eq!(review.summary(), "fine");
        review.set_summary("better").unwrap();
        assert_eq!(review.summary(), "better");

        review.set_employee_id(2, &directory).unwrap();
        assert_eq!(review.employee_id(), 2);
        assert!(review.set_employee_id(5, &directory).is_err());
        assert_eq!(review.employee_id(), 2);
    }

    #[test]
    fn test_restore_checks_pure_rules_only() {
        // Employee 42 is not in any directory; restore trusts the stored row
        let review = Review::restore(7, 2019, "archived", 42).unwrap();

        assert_eq!(review.id, Some(7));
        assert!(review.is_persisted());
        assert_eq!(review.employee_id(), 42);

        assert!(Review::restore(7, 1990, "archived", 42).is_err());
        assert!(Review::restore(7, 2019, " ", 42).is_err());
    }
}
