//! Completed-topic endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::CreatedResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{CompletedTopic, NewCompletedTopic};

/// GET /api/completed-topics
async fn list_completed_topics(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompletedTopic>>, ApiError> {
    let topics = state.store.list_completed_topics().await?;
    Ok(Json(topics))
}

/// POST /api/completed-topics
async fn create_completed_topic(
    State(state): State<AppState>,
    ValidJson(topic): ValidJson<NewCompletedTopic>,
) -> Result<(StatusCode, Json<CreatedResponse<NewCompletedTopic>>), ApiError> {
    let id = state.store.insert_completed_topic(&topic).await?;
    tracing::info!(id, revision_count = topic.revision_count, "Completed topic saved");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Completed topic saved successfully",
            id,
            data: topic,
        }),
    ))
}

/// Completed-topic routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/completed-topics",
        get(list_completed_topics).post(create_completed_topic),
    )
}
