//! Store sobre PostgreSQL
//!
//! Las implementaciones de cada repositorio viven junto a su trait; este
//! módulo sólo define el struct que envuelve el pool.

use sqlx::PgPool;

#[derive(Clone)]
pub struct PgFleetStore {
    pool: PgPool,
}

impl PgFleetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
