//! In-process employee store

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EmployeeStore, StoreError};
use crate::models::{Employee, EmployeeFields, EmployeeId};

/// Employee rows kept in a `BTreeMap`, ids handed out like SQLite's
/// AUTOINCREMENT (monotonic, never reused).
#[derive(Debug, Default)]
pub struct MemoryEmployeeStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<EmployeeId, Employee>,
    last_id: EmployeeId,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: EmployeeId) -> Result<Employee, StoreError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let employee = Employee::from_fields(inner.last_id, fields);
        inner.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        *row = Employee::from_fields(id, fields);
        Ok(row.clone())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.rows.len() as i64)
    }
}
