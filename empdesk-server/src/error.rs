//! Error types for empdesk-server startup

use thiserror::Error;

use crate::config::ConfigError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Failures that stop the server from starting or running
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
