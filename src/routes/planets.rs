use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::Planet,
    response::ErrorResponse,
    routes::extract::IdPath,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets))
        .route("/{id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    Ok(Json(catalog_service::list_planets(state.orm.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found", body = ErrorResponse),
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Planet>> {
    Ok(Json(catalog_service::get_planet(state.orm.as_ref(), id).await?))
}
