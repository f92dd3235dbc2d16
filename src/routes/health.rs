use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, response::ErrorResponse, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Database reachable", body = HealthData),
        (status = 500, description = "Database unreachable", body = ErrorResponse),
    ),
    tag = "Health"
)]
pub async fn readiness_check(State(state): State<AppState>) -> AppResult<Json<HealthData>> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    Ok(Json(HealthData {
        status: "ready".to_string(),
    }))
}
