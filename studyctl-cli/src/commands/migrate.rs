//! Schema and connectivity commands
//!
//! - `migrate`: create the tables and exit
//! - `check`: connect and print the PostgreSQL version

use anyhow::{Context, Result};
use clap::Parser;

use studyctl_server::{db, ServerConfig};

/// Database selection shared by `migrate` and `check`
#[derive(Parser, Debug)]
pub struct DatabaseArgs {
    /// Database URL (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

impl DatabaseArgs {
    fn resolve(self) -> Result<ServerConfig> {
        let mut config = ServerConfig::from_env().context("Invalid configuration")?;
        if let Some(url) = self.database_url {
            config.database_url = url;
        }
        Ok(config)
    }
}

/// Create both tables if missing
pub async fn run_migrate(args: DatabaseArgs) -> Result<()> {
    let config = args.resolve()?;
    let pool = db::create_pool(&config.database_url, 1)
        .await
        .context("Failed to connect to database")?;

    let result = db::initialize_schema(&pool)
        .await
        .context("Failed to create schema");
    pool.close().await;
    result?;

    println!("Schema ready");
    Ok(())
}

/// Verify the database is reachable
pub async fn run_check(args: DatabaseArgs) -> Result<()> {
    let config = args.resolve()?;
    let pool = db::create_pool(&config.database_url, 1)
        .await
        .context("Failed to connect to database")?;

    let version = db::server_version(&pool).await;
    pool.close().await;
    let version = version.context("Database query failed")?;

    println!("PostgreSQL connected: {}", version);
    Ok(())
}
