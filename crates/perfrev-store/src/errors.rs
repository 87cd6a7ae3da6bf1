//! Error handling for perfrev-store
//!
//! Adapts driver-level failures into the core error taxonomy

use perfrev_core::PerfRevError;

/// Create a persistence-error adapter for rusqlite::Error, tagged with the
/// failing operation
///
/// Usage: `.map_err(from_rusqlite("insert_review"))`
pub fn from_rusqlite(op: &'static str) -> impl Fn(rusqlite::Error) -> PerfRevError {
    move |err| PerfRevError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}
