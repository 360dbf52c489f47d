//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per operation (RETURNING instead of re-reads)
//! - Missing rows detected from the statement result, not a prior SELECT

pub mod employees;

pub use employees::SqlEmployeeStore;
