use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    dto::favorites::FavoriteRequest,
    error::AppResult,
    models::FavoriteTarget,
    response::{ErrorResponse, MessageResponse},
    routes::extract::{IdPath, JsonBody},
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/planet/{planet_id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/people/{people_id}",
            post(add_favorite_people).delete(remove_favorite_people),
        )
}

async fn add(
    state: &AppState,
    target: FavoriteTarget,
    payload: FavoriteRequest,
    msg: &str,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    favorite_service::add_favorite(state.orm.as_ref(), payload.user_id, target).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(msg))))
}

async fn remove(
    state: &AppState,
    target: FavoriteTarget,
    payload: FavoriteRequest,
    msg: &str,
) -> AppResult<Json<MessageResponse>> {
    favorite_service::remove_favorite(state.orm.as_ref(), payload.user_id, target).await?;
    Ok(Json(MessageResponse::new(msg)))
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Planet is in the user's favorites", body = MessageResponse),
        (status = 400, description = "Malformed body, unknown user or unknown planet", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
    JsonBody(payload): JsonBody<FavoriteRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    add(
        &state,
        FavoriteTarget::Planet(planet_id),
        payload,
        "Planet added to favorites",
    )
    .await
}

#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Person ID")
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Person is in the user's favorites", body = MessageResponse),
        (status = 400, description = "Malformed body, unknown user or unknown person", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    IdPath(people_id): IdPath,
    JsonBody(payload): JsonBody<FavoriteRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    add(
        &state,
        FavoriteTarget::Person(people_id),
        payload,
        "Person added to favorites",
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Planet is no longer in the user's favorites", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath,
    JsonBody(payload): JsonBody<FavoriteRequest>,
) -> AppResult<Json<MessageResponse>> {
    remove(
        &state,
        FavoriteTarget::Planet(planet_id),
        payload,
        "Planet removed from favorites",
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Person ID")
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Person is no longer in the user's favorites", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_people(
    State(state): State<AppState>,
    IdPath(people_id): IdPath,
    JsonBody(payload): JsonBody<FavoriteRequest>,
) -> AppResult<Json<MessageResponse>> {
    remove(
        &state,
        FavoriteTarget::Person(people_id),
        payload,
        "Person removed from favorites",
    )
    .await
}
