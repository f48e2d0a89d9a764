use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::catalog::{repo::seaorm::SeaOrmServiceRepository, repository::ServiceRepository, CatalogService};

/// Shared handler state, built once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService>,
}

impl ServerState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog: Arc::new(catalog) }
    }

    pub fn from_repository(repo: Arc<dyn ServiceRepository>) -> Self {
        Self::new(CatalogService::new(repo))
    }

    /// Catalog backed by the SQL store behind `db`.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::from_repository(Arc::new(SeaOrmServiceRepository::new(db)))
    }
}
