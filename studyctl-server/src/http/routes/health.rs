//! Liveness and health endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;
use crate::store::DatabaseStatus;

/// Root liveness response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStatus>,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Smart Study Scheduler API is running!",
    })
}

/// GET /api/health
///
/// Always 200 while the process is up; database reachability is reported
/// in the body, not the status code.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        database: state.store.database_status().await,
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
}
