use favorites_catalog_api::{
    config::AppConfig,
    db::{create_pool, orm_from_pool, run_migrations},
};

const PEOPLE: &[&str] = &[
    "Luke Skywalker",
    "Leia Organa",
    "Han Solo",
    "Darth Vader",
    "Obi-Wan Kenobi",
];

const PLANETS: &[&str] = &["Alderaan", "Hoth", "Tatooine", "Dagobah", "Endor"];

const USERS: &[&str] = &["luke@rebellion.org", "leia@rebellion.org"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm_from_pool(&pool)).await?;

    for email in USERS {
        let user_id = ensure_user(&pool, email).await?;
        println!("Ensured user {email} (id={user_id})");
    }
    seed_names(
        &pool,
        "INSERT INTO people (people_name) VALUES ($1) ON CONFLICT (people_name) DO NOTHING",
        PEOPLE,
    )
    .await?;
    println!("Seeded people");
    seed_names(
        &pool,
        "INSERT INTO planets (planet_name) VALUES ($1) ON CONFLICT (planet_name) DO NOTHING",
        PLANETS,
    )
    .await?;
    println!("Seeded planets");

    println!("Seed completed");
    Ok(())
}

async fn ensure_user(pool: &sqlx::PgPool, email: &str) -> anyhow::Result<i32> {
    let row: Option<(i32,)> = sqlx::query_as(
        r#"
        INSERT INTO users (email, is_active)
        VALUES ($1, TRUE)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    // If user already exists, fetch id
    let user_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (i32,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };
    Ok(user_id)
}

async fn seed_names(pool: &sqlx::PgPool, insert: &str, names: &[&str]) -> anyhow::Result<()> {
    for name in names {
        sqlx::query(insert).bind(*name).execute(pool).await?;
    }
    Ok(())
}
