//! Employee repository
//!
//! Every operation is a single statement:
//! - insert/update: `RETURNING` the row (no re-read)
//! - update/delete: a missing id shows up as zero rows, no check-then-act

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{Employee, EmployeeFields, EmployeeId};
use crate::store::{EmployeeStore, StoreError};

const COLUMNS: &str = "id, name, gender, address, phone, salary, department";

/// SQL-backed [`EmployeeStore`]
#[derive(Clone)]
pub struct SqlEmployeeStore {
    pool: SqlitePool,
}

impl SqlEmployeeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SqlEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, id: EmployeeId) -> Result<Employee, StoreError> {
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<Employee, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            r#"
            INSERT INTO employees (name, gender, address, phone, salary, department)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&fields.name)
        .bind(&fields.gender)
        .bind(&fields.address)
        .bind(fields.phone)
        .bind(fields.salary)
        .bind(&fields.department)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn update(
        &self,
        id: EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Employee, StoreError> {
        sqlx::query_as::<_, Employee>(&format!(
            r#"
            UPDATE employees
            SET name = ?, gender = ?, address = ?, phone = ?, salary = ?, department = ?
            WHERE id = ?
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&fields.name)
        .bind(&fields.gender)
        .bind(&fields.address)
        .bind(fields.phone)
        .bind(fields.salary)
        .bind(&fields.department)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
