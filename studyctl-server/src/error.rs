//! Error types for studyctl-server startup
//!
//! Request-time failures are `http::ApiError`; anything here stops the
//! process before (or instead of) serving.

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, StartupError>;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
