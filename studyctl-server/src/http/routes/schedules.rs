//! Schedule endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::CreatedResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{NewSchedule, Schedule};

/// GET /api/schedule - every stored schedule
async fn list_schedules(State(state): State<AppState>) -> Result<Json<Vec<Schedule>>, ApiError> {
    let schedules = state.store.list_schedules().await?;
    Ok(Json(schedules))
}

/// POST /api/schedule - store a schedule
async fn create_schedule(
    State(state): State<AppState>,
    ValidJson(schedule): ValidJson<NewSchedule>,
) -> Result<(StatusCode, Json<CreatedResponse<NewSchedule>>), ApiError> {
    let id = state.store.insert_schedule(&schedule).await?;
    tracing::info!(id, subjects = schedule.subjects.len(), "Schedule saved");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Schedule saved successfully",
            id,
            data: schedule,
        }),
    ))
}

/// Schedule routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/schedule", get(list_schedules).post(create_schedule))
}
