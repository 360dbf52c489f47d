//! Domain models with validation at the boundary
//!
//! Form input is converted into typed fields before it reaches the store.
//! Invalid input returns ValidationError, not panic.

pub mod employee;
pub mod validation;

pub use employee::{Employee, EmployeeFields, EmployeeForm, EmployeeId};
pub use validation::ValidationError;
