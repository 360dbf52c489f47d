//! empdesk-server: employee records over HTTP
//!
//! A single `employees` table behind an injected [`EmployeeStore`], served
//! as HTML pages for listing, adding, editing and deleting records.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use db::SqlEmployeeStore;
pub use error::{ServerError, ServerResult};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
pub use store::{EmployeeStore, MemoryEmployeeStore, StoreError};

/// Open the SQL store named by `config.database`, creating the schema.
pub async fn open_sql_store(config: &AppConfig) -> ServerResult<SqlEmployeeStore> {
    let pool = db::create_pool(&config.database.url, config.database.max_connections).await?;
    db::migrations::run(&pool).await?;
    tracing::info!(url = %config.database.url, "database ready");
    Ok(SqlEmployeeStore::new(pool))
}

/// Start the HTTP server against the configured SQL database
pub async fn serve(config: &AppConfig) -> ServerResult<()> {
    let store = open_sql_store(config).await?;
    run_server(AppState::new(store), ServerConfig::from(config)).await
}
