use std::collections::HashMap;

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::{
    entity::{Favorites, Users, favorites, users},
    error::AppResult,
    models::{Favorite, User, UserWithFavorites},
    services::favorite_service::resolve_favorites,
};

pub async fn list_users<C: ConnectionTrait>(db: &C) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(users::Column::Id)
        .all(db)
        .await?;
    Ok(users.into_iter().map(User::from).collect())
}

/// Every user with their resolved favorites embedded under `favoritos`.
pub async fn list_users_with_favorites<C: ConnectionTrait>(
    db: &C,
) -> AppResult<Vec<UserWithFavorites>> {
    let users = Users::find()
        .order_by_asc(users::Column::Id)
        .all(db)
        .await?;

    let rows = Favorites::find()
        .order_by_asc(favorites::Column::Id)
        .all(db)
        .await?;

    let mut by_user: HashMap<i32, Vec<Favorite>> = HashMap::new();
    for favorite in resolve_favorites(db, rows).await? {
        by_user.entry(favorite.user_id).or_default().push(favorite);
    }

    Ok(users
        .into_iter()
        .map(|user| UserWithFavorites {
            favoritos: by_user.remove(&user.id).unwrap_or_default(),
            user: User::from(user),
        })
        .collect())
}
