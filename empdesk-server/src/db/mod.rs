//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Rely on single statements, no check-then-update
//! - Schema created idempotently on startup

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
