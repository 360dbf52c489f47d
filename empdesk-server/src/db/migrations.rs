//! Schema setup for the employees table
//!
//! Idempotent: safe to run on every startup. There is no versioned
//! migration chain.

use sqlx::SqlitePool;

/// Create the employees table if it does not exist yet
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            gender TEXT NOT NULL,
            address TEXT NOT NULL,
            phone INTEGER NOT NULL,
            salary INTEGER NOT NULL,
            department TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("database migrations complete");
    Ok(())
}
