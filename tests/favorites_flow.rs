use std::collections::HashSet;

use favorites_catalog_api::{
    db::{create_orm_conn, run_migrations},
    entity::{
        Favorites, favorites,
        people::ActiveModel as PersonActive,
        planets::ActiveModel as PlanetActive,
        users::ActiveModel as UserActive,
    },
    error::AppError,
    models::FavoriteTarget,
    services::{catalog_service, favorite_service, user_service},
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set, Statement,
};

// Integration flow against a real database: seeded catalog, idempotent add,
// no-op remove, add+remove round trip and 404 on unknown ids.
#[tokio::test]
async fn favorites_lifecycle() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let orm = setup(&database_url).await?;

    let user_id = create_user(&orm, "luke@rebellion.org").await?;
    let luke = create_person(&orm, "Luke Skywalker").await?;
    create_person(&orm, "Leia Organa").await?;
    create_planet(&orm, "Alderaan").await?;
    create_planet(&orm, "Hoth").await?;
    let tatooine = create_planet(&orm, "Tatooine").await?;

    // Catalog lists return every seeded row with unique names.
    let people = catalog_service::list_people(&orm).await?;
    assert_eq!(people.len(), 2);
    let planets = catalog_service::list_planets(&orm).await?;
    let names: HashSet<_> = planets.iter().map(|p| p.planet_name.as_str()).collect();
    assert_eq!(planets.len(), 3);
    assert_eq!(names.len(), 3);

    let missing = catalog_service::get_person(&orm, luke + 1000).await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    // Adding the same planet twice stores exactly one row.
    let planet = FavoriteTarget::Planet(tatooine);
    assert!(favorite_service::add_favorite(&orm, user_id, planet).await?);
    assert!(!favorite_service::add_favorite(&orm, user_id, planet).await?);

    let rows = Favorites::find()
        .filter(favorites::Column::UserId.eq(user_id))
        .all(&orm)
        .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].planet_id, Some(tatooine));
    assert_eq!(rows[0].people_id, None);

    // Removing a favorite that does not exist is a no-op.
    let person = FavoriteTarget::Person(luke);
    assert!(!favorite_service::remove_favorite(&orm, user_id, person).await?);
    assert_eq!(Favorites::find().count(&orm).await?, 1);

    // Add then remove restores the original set.
    let before = favorite_service::list_favorites_for_user(&orm, user_id).await?;
    assert!(favorite_service::add_favorite(&orm, user_id, person).await?);
    assert_eq!(
        favorite_service::list_favorites_for_user(&orm, user_id)
            .await?
            .len(),
        2
    );
    assert!(favorite_service::remove_favorite(&orm, user_id, person).await?);
    let after = favorite_service::list_favorites_for_user(&orm, user_id).await?;
    assert_eq!(before, after);

    // Users endpoint embeds the resolved favorites.
    let users = user_service::list_users_with_favorites(&orm).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].favoritos.len(), 1);
    assert_eq!(users[0].favoritos[0].target.name, "Tatooine");

    // The database itself refuses duplicates, independent of the service.
    let duplicate = favorites::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        people_id: Set(None),
        planet_id: Set(Some(tatooine)),
        created_at: NotSet,
    }
    .insert(&orm)
    .await;
    assert!(duplicate.is_err());

    Ok(())
}

async fn setup(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE favoritos, people, planets, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(orm)
}

async fn create_user(orm: &DatabaseConnection, email: &str) -> anyhow::Result<i32> {
    let user = UserActive {
        id: NotSet,
        email: Set(email.to_string()),
        is_active: Set(true),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;
    Ok(user.id)
}

async fn create_person(orm: &DatabaseConnection, name: &str) -> anyhow::Result<i32> {
    let person = PersonActive {
        id: NotSet,
        people_name: Set(name.to_string()),
    }
    .insert(orm)
    .await?;
    Ok(person.id)
}

async fn create_planet(orm: &DatabaseConnection, name: &str) -> anyhow::Result<i32> {
    let planet = PlanetActive {
        id: NotSet,
        planet_name: Set(name.to_string()),
    }
    .insert(orm)
    .await?;
    Ok(planet.id)
}
