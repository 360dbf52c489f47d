//! Database initialization command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use empdesk_server::{open_sql_store, AppConfig, EmployeeStore};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (overrides the config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Config file (default: ~/.empdesk/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Create the employees table and report how many rows it holds
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(url) = args.database_url {
        config.database.url = url;
    }

    let store = open_sql_store(&config)
        .await
        .context("Failed to open database")?;
    let count = store.count().await.context("Failed to count employees")?;

    println!("Database ready at {}", config.database.url);
    println!("{} employee record(s)", count);
    Ok(())
}
