//! studyctl-server: HTTP API for study schedules and completed topics
//!
//! Accepts schedules and completed-topic records from the study planner
//! frontend, stores them in PostgreSQL, and returns them on request.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod store;

use std::sync::Arc;

pub use config::ServerConfig;
pub use error::{Result, StartupError};
pub use store::{MemoryStore, PgStore, StudyStore};

/// Connect to the database, create the schema, and serve until shutdown.
pub async fn serve(config: ServerConfig) -> Result<()> {
    tracing::info!(port = config.port, "Starting study scheduler API");

    let store = PgStore::connect(&config.database_url, config.max_connections).await?;
    http::run_server(Arc::new(store), &config).await
}

/// Serve with records held in memory only.
pub async fn serve_in_memory(config: ServerConfig) -> Result<()> {
    tracing::warn!("Using in-memory store: records are lost on exit");
    http::run_server(Arc::new(MemoryStore::new()), &config).await
}
