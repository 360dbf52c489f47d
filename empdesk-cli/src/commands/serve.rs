//! HTTP server command
//!
//! Runs the employee pages against the configured SQLite database, or an
//! in-process store with `--in-memory`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use empdesk_server::{
    open_sql_store, run_server, AppConfig, AppState, MemoryEmployeeStore, ServerConfig,
};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides the config file)
    #[arg(long, short = 'b', env = "EMPDESK_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides the config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Keep records in memory only; nothing survives a restart
    #[arg(long, conflicts_with = "database_url")]
    pub in_memory: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Config file (default: ~/.empdesk/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// Layer command-line flags over the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if self.cors_permissive {
            config.server.cors_permissive = true;
        }
        if let Some(secs) = self.timeout {
            config.server.request_timeout_secs = secs;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load config")?;
    args.apply(&mut config);

    let state = if args.in_memory {
        tracing::warn!("Using in-memory store; records are lost on shutdown");
        AppState::new(MemoryEmployeeStore::new())
    } else {
        let store = open_sql_store(&config)
            .await
            .context("Failed to open database")?;
        AppState::new(store)
    };

    let server_config = ServerConfig::from(&config);
    tracing::info!(
        bind = %server_config.bind_addr,
        timeout_secs = config.server.request_timeout_secs,
        "Starting empdesk server"
    );

    // Blocks until shutdown
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
