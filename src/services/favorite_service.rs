use std::collections::HashMap;

use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, sea_query::OnConflict,
};

use crate::{
    entity::{
        Favorites, People, Planets, Users,
        favorites::{self, ActiveModel, Column},
        people, planets,
    },
    error::{AppError, AppResult},
    models::{Favorite, FavoriteTarget},
};

/// Adds `target` to the user's favorites inside its own transaction.
/// Returns `true` when a row was inserted and `false` when it already existed.
pub async fn add_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<bool> {
    let txn = db.begin().await?;
    let inserted = insert_favorite(&txn, user_id, target).await?;
    txn.commit().await?;

    if inserted {
        tracing::info!(user_id, ?target, "favorite added");
    } else {
        tracing::debug!(user_id, ?target, "favorite already present");
    }
    Ok(inserted)
}

/// Removes `target` from the user's favorites. Removing something that is
/// not a favorite is not an error; the result is `false` in that case.
pub async fn remove_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<bool> {
    let txn = db.begin().await?;
    let removed = delete_favorite(&txn, user_id, target).await?;
    txn.commit().await?;

    if removed {
        tracing::info!(user_id, ?target, "favorite removed");
    } else {
        tracing::debug!(user_id, ?target, "favorite not present, nothing removed");
    }
    Ok(removed)
}

pub async fn list_favorites_for_user<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> AppResult<Vec<Favorite>> {
    if Users::find_by_id(user_id).one(db).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let rows = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;

    resolve_favorites(db, rows).await
}

/// Insert half of `add_favorite`, usable inside a caller-owned transaction.
/// Uniqueness of (user, target) is left to the database constraints.
pub async fn insert_favorite<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<bool> {
    ensure_user_exists(conn, user_id).await?;
    ensure_target_exists(conn, target).await?;

    let conflict_target = match target {
        FavoriteTarget::Person(_) => [Column::UserId, Column::PeopleId],
        FavoriteTarget::Planet(_) => [Column::UserId, Column::PlanetId],
    };

    let active = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        people_id: Set(target.people_id()),
        planet_id: Set(target.planet_id()),
        created_at: NotSet,
    };

    let inserted = match Favorites::insert(active)
        .on_conflict(OnConflict::columns(conflict_target).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await
    {
        Ok(rows) => rows,
        Err(DbErr::RecordNotInserted) => 0,
        Err(err) => return Err(err.into()),
    };

    Ok(inserted > 0)
}

pub async fn delete_favorite<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<bool> {
    let target_filter = match target {
        FavoriteTarget::Person(id) => Column::PeopleId.eq(id),
        FavoriteTarget::Planet(id) => Column::PlanetId.eq(id),
    };

    let result = Favorites::delete_many()
        .filter(Column::UserId.eq(user_id))
        .filter(target_filter)
        .exec(conn)
        .await?;

    Ok(result.rows_affected > 0)
}

/// Attaches the person or planet name to each stored row. Rows whose target
/// cannot be resolved are skipped.
pub async fn resolve_favorites<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<favorites::Model>,
) -> AppResult<Vec<Favorite>> {
    let people_ids: Vec<i32> = rows.iter().filter_map(|row| row.people_id).collect();
    let planet_ids: Vec<i32> = rows.iter().filter_map(|row| row.planet_id).collect();

    let people_names: HashMap<i32, String> = if people_ids.is_empty() {
        HashMap::new()
    } else {
        People::find()
            .filter(people::Column::Id.is_in(people_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|person| (person.id, person.people_name))
            .collect()
    };

    let planet_names: HashMap<i32, String> = if planet_ids.is_empty() {
        HashMap::new()
    } else {
        Planets::find()
            .filter(planets::Column::Id.is_in(planet_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|planet| (planet.id, planet.planet_name))
            .collect()
    };

    let mut favorites = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(target) = FavoriteTarget::from_columns(row.people_id, row.planet_id) else {
            tracing::warn!(favorite_id = row.id, "favorite row has no single target");
            continue;
        };
        let name = match target {
            FavoriteTarget::Person(id) => people_names.get(&id),
            FavoriteTarget::Planet(id) => planet_names.get(&id),
        };
        match name {
            Some(name) => favorites.push(Favorite::resolved(row, target, name.clone())),
            None => tracing::warn!(favorite_id = row.id, ?target, "favorite target missing"),
        }
    }

    Ok(favorites)
}

async fn ensure_user_exists<C: ConnectionTrait>(conn: &C, user_id: i32) -> AppResult<()> {
    if Users::find_by_id(user_id).one(conn).await?.is_none() {
        return Err(AppError::BadRequest(format!("user {user_id} not found")));
    }
    Ok(())
}

async fn ensure_target_exists<C: ConnectionTrait>(
    conn: &C,
    target: FavoriteTarget,
) -> AppResult<()> {
    let exists = match target {
        FavoriteTarget::Person(id) => People::find_by_id(id).one(conn).await?.is_some(),
        FavoriteTarget::Planet(id) => Planets::find_by_id(id).one(conn).await?.is_some(),
    };
    if !exists {
        return Err(AppError::BadRequest(match target {
            FavoriteTarget::Person(id) => format!("person {id} not found"),
            FavoriteTarget::Planet(id) => format!("planet {id} not found"),
        }));
    }
    Ok(())
}
