//! perfrev store - SQLite persistence for reviews
//!
//! Provides:
//! - Connection management for the embedded database
//! - Idempotent table lifecycle DDL (create/drop)
//! - Review repository with an identity-map cache
//! - Employee repository and the SQL-backed directory

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use perfrev_core::Result;
pub use repo::{EmployeeRepo, ReviewRepo, SqlDirectory};
