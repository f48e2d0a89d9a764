use std::sync::Arc;

use models::salon_service;
use tracing::{debug, info, instrument};

use super::domain::{ListParams, ServiceCreate, ServiceStatistics, ServiceUpdate};
use super::repository::ServiceRepository;
use crate::errors::ServiceError;

/// Catalog business service independent of web framework.
///
/// The single validation point for create and patch input; repositories
/// store what they are given.
pub struct CatalogService<R: ServiceRepository + ?Sized = dyn ServiceRepository> {
    repo: Arc<R>,
}

impl<R: ServiceRepository + ?Sized> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, params: ListParams) -> Result<Vec<salon_service::Model>, ServiceError> {
        let rows = self.repo.list(&params).await?;
        debug!(count = rows.len(), offset = params.pagination.offset, sort = ?params.sort, "services_listed");
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<salon_service::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::service_not_found(id))
    }

    /// Validate and persist a new service; the store assigns its id.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, repository::mock::MockServiceRepository, domain::ServiceCreate};
    /// use models::salon_service::Category;
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(Arc::new(MockServiceRepository::default()));
    /// let input = ServiceCreate { name: "Haircut".into(), description: String::new(), category: Category::Trim, price: 20.0, duration_minutes: 30, difficulty_level: 2, popularity_score: 7.5 };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name, category = %input.category))]
    pub async fn create(&self, input: ServiceCreate) -> Result<salon_service::Model, ServiceError> {
        input.validate()?;
        let created = self.repo.create(&input).await?;
        info!(id = created.id, "service_created");
        Ok(created)
    }

    /// Apply a partial update. Fields left out of `patch` keep their stored value.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, repository::mock::MockServiceRepository, domain::{ServiceCreate, ServiceUpdate}};
    /// use models::salon_service::Category;
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(Arc::new(MockServiceRepository::default()));
    /// let input = ServiceCreate { name: "Haircut".into(), description: String::new(), category: Category::Trim, price: 20.0, duration_minutes: 30, difficulty_level: 2, popularity_score: 7.5 };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// let patch = ServiceUpdate { price: Some(25.0), ..Default::default() };
    /// let updated = tokio_test::block_on(svc.update(created.id, patch)).unwrap();
    /// assert_eq!(updated.price, 25.0);
    /// assert_eq!(updated.name, "Haircut");
    /// ```
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: ServiceUpdate) -> Result<salon_service::Model, ServiceError> {
        patch.validate()?;
        let updated = self.repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| ServiceError::service_not_found(id))?;
        info!(id, empty_patch = patch.is_empty(), "service_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::service_not_found(id));
        }
        info!(id, "service_deleted");
        Ok(())
    }

    pub async fn statistics(&self) -> Result<ServiceStatistics, ServiceError> {
        self.repo.statistics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::FieldStatistics;
    use crate::catalog::repository::mock::MockServiceRepository;
    use crate::catalog::repo::seaorm::SeaOrmServiceRepository;
    use crate::test_support::get_db;
    use models::salon_service::Category;

    fn haircut() -> ServiceCreate {
        ServiceCreate {
            name: "Haircut".into(),
            description: String::new(),
            category: Category::Trim,
            price: 20.0,
            duration_minutes: 30,
            difficulty_level: 2,
            popularity_score: 7.5,
        }
    }

    fn mock_service() -> (Arc<MockServiceRepository>, CatalogService<MockServiceRepository>) {
        let repo = Arc::new(MockServiceRepository::default());
        (repo.clone(), CatalogService::new(repo))
    }

    #[tokio::test]
    async fn out_of_range_create_is_rejected_before_the_store() {
        let (repo, svc) = mock_service();

        let mut too_hard = haircut();
        too_hard.difficulty_level = 11;
        assert!(matches!(svc.create(too_hard).await, Err(ServiceError::Model(_))));

        let mut unpopular = haircut();
        unpopular.popularity_score = -1.0;
        assert!(matches!(svc.create(unpopular).await, Err(ServiceError::Model(_))));

        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let (_, svc) = mock_service();
        assert!(matches!(svc.get(99999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update(99999, ServiceUpdate::default()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(99999).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn ids_are_unique_and_stable() -> Result<(), ServiceError> {
        let (_, svc) = mock_service();
        let a = svc.create(haircut()).await?;
        let b = svc.create(haircut()).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(svc.get(a.id).await?.id, a.id);
        svc.delete(a.id).await?;
        let c = svc.create(haircut()).await?;
        assert_ne!(c.id, a.id);
        Ok(())
    }

    #[tokio::test]
    async fn empty_patch_leaves_record_unchanged() -> Result<(), ServiceError> {
        let (_, svc) = mock_service();
        let created = svc.create(haircut()).await?;
        let same = svc.update(created.id, ServiceUpdate::default()).await?;
        assert_eq!(same, created);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_patch_changes_nothing() -> Result<(), ServiceError> {
        let (_, svc) = mock_service();
        let created = svc.create(haircut()).await?;
        let patch = ServiceUpdate { price: Some(99.0), difficulty_level: Some(-3), ..Default::default() };
        assert!(svc.update(created.id, patch).await.is_err());
        assert_eq!(svc.get(created.id).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn sql_backed_service_rejects_out_of_range_input() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmServiceRepository::new(get_db().await?));
        let svc = CatalogService::new(repo.clone());

        let mut too_hard = haircut();
        too_hard.difficulty_level = 11;
        assert!(matches!(svc.create(too_hard).await, Err(ServiceError::Model(_))));

        let created = svc.create(haircut()).await?;
        let patch = ServiceUpdate { popularity_score: Some(-1.0), ..Default::default() };
        assert!(matches!(svc.update(created.id, patch).await, Err(ServiceError::Model(_))));
        // invalid patch on an unknown id is still a validation failure
        let patch = ServiceUpdate { difficulty_level: Some(42), ..Default::default() };
        assert!(matches!(svc.update(99999, patch).await, Err(ServiceError::Model(_))));

        assert_eq!(repo.list(&ListParams::default()).await?, vec![created]);
        Ok(())
    }

    #[tokio::test]
    async fn mock_and_sql_statistics_agree() -> Result<(), anyhow::Error> {
        let (_, mock) = mock_service();
        let sql = CatalogService::new(Arc::new(SeaOrmServiceRepository::new(get_db().await?)));

        assert_eq!(sql.statistics().await?, mock.statistics().await?);

        for (price, minutes, level, score) in [(10.0, 20, 1, 3.0), (35.5, 60, 7, 9.5), (12.0, 45, 4, 6.0)] {
            let input = ServiceCreate { price, duration_minutes: minutes, difficulty_level: level, popularity_score: score, ..haircut() };
            mock.create(input.clone()).await?;
            sql.create(input).await?;
        }

        let from_sql = sql.statistics().await?;
        let from_mock = mock.statistics().await?;
        assert_eq!(from_sql.duration_minutes, from_mock.duration_minutes);
        assert_eq!(from_sql.difficulty_level, FieldStatistics { average: 4.0, min: 1.0, max: 7.0, count: 3 });
        assert_eq!(from_sql.price.min, from_mock.price.min);
        assert_eq!(from_sql.price.max, from_mock.price.max);
        assert!((from_sql.price.average - from_mock.price.average).abs() < 1e-9);
        Ok(())
    }
}
