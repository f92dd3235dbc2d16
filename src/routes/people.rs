use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::Person,
    response::ErrorResponse,
    routes::extract::IdPath,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people))
        .route("/{id}", get(get_person))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All people", body = Vec<Person>)
    ),
    tag = "People"
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    Ok(Json(catalog_service::list_people(state.orm.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = Person),
        (status = 404, description = "Person not found", body = ErrorResponse),
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Person>> {
    Ok(Json(catalog_service::get_person(state.orm.as_ref(), id).await?))
}
