use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::{
    entity::{People, Planets, people, planets},
    error::{AppError, AppResult},
    models::{Person, Planet},
};

pub async fn list_people<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Person>> {
    let people = People::find()
        .order_by_asc(people::Column::Id)
        .all(db)
        .await?;
    Ok(people.into_iter().map(Person::from).collect())
}

pub async fn get_person<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Person> {
    People::find_by_id(id)
        .one(db)
        .await?
        .map(Person::from)
        .ok_or(AppError::NotFound)
}

pub async fn list_planets<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Planet>> {
    let planets = Planets::find()
        .order_by_asc(planets::Column::Id)
        .all(db)
        .await?;
    Ok(planets.into_iter().map(Planet::from).collect())
}

pub async fn get_planet<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Planet> {
    Planets::find_by_id(id)
        .one(db)
        .await?
        .map(Planet::from)
        .ok_or(AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    #[tokio::test]
    async fn lists_people_in_id_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                people::Model {
                    id: 1,
                    people_name: "Luke Skywalker".into(),
                },
                people::Model {
                    id: 2,
                    people_name: "Leia Organa".into(),
                },
            ]])
            .into_connection();

        let people = list_people(&db).await.unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].people_name, "Luke Skywalker");
        assert_eq!(people[1].id, 2);
    }

    #[tokio::test]
    async fn missing_person_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<people::Model>::new()])
            .into_connection();

        let err = get_person(&db, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn fetches_planet_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![planets::Model {
                id: 3,
                planet_name: "Tatooine".into(),
            }]])
            .into_connection();

        let planet = get_planet(&db, 3).await.unwrap();
        assert_eq!(
            planet,
            Planet {
                id: 3,
                planet_name: "Tatooine".into()
            }
        );
    }
}
