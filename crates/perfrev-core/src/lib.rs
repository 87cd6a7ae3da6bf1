//! perfrev core - domain models for employee review persistence
//!
//! This crate provides the foundational data structures for perfrev,
//! including:
//! - The Review model with attribute invariants enforced on every assignment
//! - The Employee record and the EmployeeDirectory lookup capability
//! - The identity map (at most one live instance per primary key)
//! - Validation rules as pure functions
//! - Error taxonomy and logging initialization

pub mod errors;
pub mod identity;
pub mod logging;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{PerfRevError, Result};
pub use identity::{IdentityMap, SharedReview};
pub use model::{Employee, EmployeeDirectory, Review};
