use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use models::salon_service;

use crate::catalog::domain::{ListParams, ServiceCreate, ServiceStatistics, ServiceUpdate};
use crate::catalog::repository::ServiceRepository;
use crate::db::salon_service_store as store;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
///
/// Opens one transaction per call. Writes commit on success; reads,
/// misses and failed writes drop the transaction, which rolls back and
/// returns the connection to the pool.
#[derive(Clone)]
pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn list(&self, params: &ListParams) -> Result<Vec<salon_service::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        store::list_services(&txn, params).await
    }

    async fn get(&self, id: i32) -> Result<Option<salon_service::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        store::get_service(&txn, id).await
    }

    async fn create(&self, input: &ServiceCreate) -> Result<salon_service::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let created = store::insert_service(&txn, input).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn update(&self, id: i32, patch: &ServiceUpdate) -> Result<Option<salon_service::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let updated = store::update_service(&txn, id, patch).await?;
        if updated.is_some() {
            txn.commit().await?;
        }
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let deleted = store::delete_service(&txn, id).await?;
        if deleted {
            txn.commit().await?;
        }
        Ok(deleted)
    }

    async fn statistics(&self) -> Result<ServiceStatistics, ServiceError> {
        let txn = self.db.begin().await?;
        store::service_statistics(&txn).await
    }
}
