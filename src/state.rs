use crate::datalayer::db_ops::{DbConfig, DbManager};

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Shared PostgreSQL pool
    pub db: DbManager,
}

impl AppState {
    pub fn new(db: DbManager) -> Self {
        Self { db }
    }

    /// State over a pool that connects on first query.
    /// Lets the router be built without a reachable database.
    pub fn lazy(config: DbConfig) -> Result<Self, sqlx::Error> {
        Ok(Self::new(DbManager::connect_lazy(config)?))
    }
}
