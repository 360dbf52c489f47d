//! Record store capability
//!
//! Handlers only ever see `Arc<dyn EmployeeStore>`; the concrete store is
//! chosen once at startup and injected through router state.
//!
//! - [`SqlEmployeeStore`](crate::db::SqlEmployeeStore): sqlx over SQLite
//! - [`MemoryEmployeeStore`]: in-process map, for tests and throwaway servers

pub mod memory;

use async_trait::async_trait;

use crate::models::{Employee, EmployeeFields, EmployeeId};

pub use memory::MemoryEmployeeStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: employee '{id}'")]
    NotFound { id: EmployeeId },
}

/// Create/read/update/delete over employee rows.
///
/// `get`, `update` and `delete` return [`StoreError::NotFound`] for an id
/// with no row.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All rows, ordered by id.
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    async fn get(&self, id: EmployeeId) -> Result<Employee, StoreError>;

    /// Insert a row under a fresh id and return it.
    async fn insert(&self, fields: EmployeeFields) -> Result<Employee, StoreError>;

    /// Replace every field of one row and return the updated row.
    async fn update(&self, id: EmployeeId, fields: EmployeeFields)
        -> Result<Employee, StoreError>;

    async fn delete(&self, id: EmployeeId) -> Result<(), StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}
