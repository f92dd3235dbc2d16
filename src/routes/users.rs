use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::{Favorite, User, UserWithFavorites},
    response::ErrorResponse,
    routes::extract::IdPath,
    services::{favorite_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/favorites", get(list_users_with_favorites))
        .route("/{user_id}/favorites", get(list_user_favorites))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(user_service::list_users(state.orm.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    responses(
        (status = 200, description = "All users with their favorites", body = Vec<UserWithFavorites>)
    ),
    tag = "Users"
)]
pub async fn list_users_with_favorites(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserWithFavorites>>> {
    Ok(Json(
        user_service::list_users_with_favorites(state.orm.as_ref()).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites of one user", body = Vec<Favorite>),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> AppResult<Json<Vec<Favorite>>> {
    Ok(Json(
        favorite_service::list_favorites_for_user(state.orm.as_ref(), user_id).await?,
    ))
}
