use thiserror::Error;

/// Result type alias using PerfRevError
pub type Result<T> = std::result::Result<T, PerfRevError>;

/// Error taxonomy for perfrev operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerfRevError {
    // ===== Validation Errors =====
    /// Review year is below the supported range
    #[error("year must be an integer >= 2000, got {year}")]
    InvalidYear { year: i32 },

    /// Review summary is empty or whitespace-only
    #[error("summary must be a non-empty string")]
    InvalidSummary,

    /// Employee reference does not resolve to an existing employee
    #[error("employee id {employee_id} must reference an existing employee")]
    UnknownEmployee { employee_id: i64 },

    // ===== Lifecycle Errors =====
    /// Operation requires a review with an assigned primary key
    #[error("review has no id: it has not been persisted")]
    ReviewNotPersisted,

    // ===== Persistence Errors =====
    /// Database-layer failure, adapted from the underlying driver
    #[error("database failure in '{op}': {message}")]
    Persistence { op: String, message: String },
}

impl PerfRevError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            PerfRevError::InvalidYear { .. } => "ERR_INVALID_YEAR",
            PerfRevError::InvalidSummary => "ERR_INVALID_SUMMARY",
            PerfRevError::UnknownEmployee { .. } => "ERR_UNKNOWN_EMPLOYEE",
            PerfRevError::ReviewNotPersisted => "ERR_NOT_PERSISTED",
            PerfRevError::Persistence { .. } => "ERR_PERSISTENCE",
        }
    }

    /// Check whether this error was raised by attribute validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PerfRevError::InvalidYear { .. }
                | PerfRevError::InvalidSummary
                | PerfRevError::UnknownEmployee { .. }
        )
    }
}
