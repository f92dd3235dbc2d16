use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::favorites::FavoriteRequest,
    models::{Favorite, FavoriteKind, FavoriteTargetView, Person, Planet, User, UserWithFavorites},
    response::{ErrorResponse, MessageResponse},
    routes::{favorites, health, people, planets, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        health::readiness_check,
        people::list_people,
        people::get_person,
        planets::list_planets,
        planets::get_planet,
        users::list_users,
        users::list_users_with_favorites,
        users::list_user_favorites,
        favorites::add_favorite_planet,
        favorites::add_favorite_people,
        favorites::remove_favorite_planet,
        favorites::remove_favorite_people
    ),
    components(
        schemas(
            Person,
            Planet,
            User,
            UserWithFavorites,
            Favorite,
            FavoriteKind,
            FavoriteTargetView,
            FavoriteRequest,
            MessageResponse,
            ErrorResponse,
            health::HealthData,
            sitemap::Endpoint
        )
    ),
    tags(
        (name = "Sitemap", description = "Endpoint listing"),
        (name = "Health", description = "Health check endpoints"),
        (name = "People", description = "People catalog"),
        (name = "Planets", description = "Planet catalog"),
        (name = "Users", description = "Users and their favorites"),
        (name = "Favorites", description = "Add and remove favorites"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
