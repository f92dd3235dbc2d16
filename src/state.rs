use std::sync::Arc;

use crate::db::{DbPool, OrmConn, orm_from_pool};

// `DatabaseConnection` is not `Clone` when sea-orm's `mock` feature is on,
// so the state shares it behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: Arc<OrmConn>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let orm = Arc::new(orm_from_pool(&pool));
        Self { pool, orm }
    }
}
