//! HTTP server layer
//!
//! Axum server with:
//! - CORS for the configured frontend origins
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState};
pub use error::ApiError;
