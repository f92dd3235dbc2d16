use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{favorites, people, planets, users};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    pub id: i32,
    pub people_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub planet_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteKind {
    Person,
    Planet,
}

/// What a favorite points at. A row of `favoritos` references exactly one
/// person or exactly one planet, never both and never neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
}

impl FavoriteTarget {
    pub fn kind(&self) -> FavoriteKind {
        match self {
            FavoriteTarget::Person(_) => FavoriteKind::Person,
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            FavoriteTarget::Person(id) | FavoriteTarget::Planet(id) => *id,
        }
    }

    pub fn people_id(&self) -> Option<i32> {
        match self {
            FavoriteTarget::Person(id) => Some(*id),
            FavoriteTarget::Planet(_) => None,
        }
    }

    pub fn planet_id(&self) -> Option<i32> {
        match self {
            FavoriteTarget::Planet(id) => Some(*id),
            FavoriteTarget::Person(_) => None,
        }
    }

    /// Rebuilds the target from the nullable foreign key pair of a stored row.
    pub fn from_columns(people_id: Option<i32>, planet_id: Option<i32>) -> Option<Self> {
        match (people_id, planet_id) {
            (Some(id), None) => Some(FavoriteTarget::Person(id)),
            (None, Some(id)) => Some(FavoriteTarget::Planet(id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteTargetView {
    pub kind: FavoriteKind,
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub people_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub target: FavoriteTargetView,
}

impl Favorite {
    pub fn resolved(row: favorites::Model, target: FavoriteTarget, name: String) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            people_id: target.people_id(),
            planet_id: target.planet_id(),
            target: FavoriteTargetView {
                kind: target.kind(),
                id: target.id(),
                name,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserWithFavorites {
    #[serde(flatten)]
    pub user: User,
    pub favoritos: Vec<Favorite>,
}

impl From<people::Model> for Person {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            people_name: model.people_name,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            planet_name: model.planet_name,
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
