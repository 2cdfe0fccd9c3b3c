//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteMappingRepository;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
}

impl AppState {
    pub fn new(mapping_service: Arc<MappingService>) -> Self {
        Self { mapping_service }
    }

    /// Builds the state on top of a SQLite pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
        Self::new(Arc::new(MappingService::new(repository)))
    }
}
