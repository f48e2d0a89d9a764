use async_trait::async_trait;
use models::salon_service;

use super::domain::{ListParams, ServiceCreate, ServiceStatistics, ServiceUpdate};
use crate::errors::ServiceError;

/// Repository abstraction for catalog persistence.
///
/// Each call is one unit of work: implementations commit writes before
/// returning and never leave partial state behind on error. Inputs arrive
/// already validated by `CatalogService`.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list(&self, params: &ListParams) -> Result<Vec<salon_service::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<salon_service::Model>, ServiceError>;
    async fn create(&self, input: &ServiceCreate) -> Result<salon_service::Model, ServiceError>;
    async fn update(&self, id: i32, patch: &ServiceUpdate) -> Result<Option<salon_service::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn statistics(&self) -> Result<ServiceStatistics, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    use crate::catalog::domain::{FieldStatistics, SortField, SortOrder};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, salon_service::Model>, // key: id
        next_id: i32,
    }

    #[derive(Default)]
    pub struct MockServiceRepository {
        table: Mutex<Table>,
    }

    impl MockServiceRepository {
        fn table(&self) -> Result<MutexGuard<'_, Table>, ServiceError> {
            self.table.lock().map_err(|e| ServiceError::Db(e.to_string()))
        }

        /// Number of stored rows.
        pub fn len(&self) -> usize {
            self.table().map(|t| t.rows.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    fn compare(a: &salon_service::Model, b: &salon_service::Model, field: SortField) -> Ordering {
        match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::DurationMinutes => a.duration_minutes.cmp(&b.duration_minutes),
            SortField::DifficultyLevel => a.difficulty_level.cmp(&b.difficulty_level),
            SortField::PopularityScore => a.popularity_score.total_cmp(&b.popularity_score),
        }
    }

    #[async_trait]
    impl ServiceRepository for MockServiceRepository {
        async fn list(&self, params: &ListParams) -> Result<Vec<salon_service::Model>, ServiceError> {
            let table = self.table()?;
            let mut rows: Vec<_> = table.rows.values().filter(|m| params.filter.matches(m)).cloned().collect();
            if let Some(sort) = params.sort {
                rows.sort_by(|a, b| {
                    let ord = compare(a, b, sort.field);
                    let ord = if sort.order == SortOrder::Desc { ord.reverse() } else { ord };
                    ord.then(a.id.cmp(&b.id))
                });
            }
            let (offset, limit) = params.pagination.normalize();
            let offset = usize::try_from(offset).unwrap_or(usize::MAX);
            Ok(rows.into_iter().skip(offset).take(limit as usize).collect())
        }

        async fn get(&self, id: i32) -> Result<Option<salon_service::Model>, ServiceError> {
            Ok(self.table()?.rows.get(&id).cloned())
        }

        async fn create(&self, input: &ServiceCreate) -> Result<salon_service::Model, ServiceError> {
            let mut table = self.table()?;
            table.next_id += 1;
            let model = salon_service::Model {
                id: table.next_id,
                name: input.name.clone(),
                description: input.description.clone(),
                category: input.category,
                price: input.price,
                duration_minutes: input.duration_minutes,
                difficulty_level: input.difficulty_level,
                popularity_score: input.popularity_score,
            };
            table.rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn update(&self, id: i32, patch: &ServiceUpdate) -> Result<Option<salon_service::Model>, ServiceError> {
            let mut table = self.table()?;
            let Some(row) = table.rows.get_mut(&id) else { return Ok(None); };
            patch.apply_to(row);
            Ok(Some(row.clone()))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.table()?.rows.remove(&id).is_some())
        }

        async fn statistics(&self) -> Result<ServiceStatistics, ServiceError> {
            let table = self.table()?;
            let rows = || table.rows.values();
            Ok(ServiceStatistics {
                price: FieldStatistics::from_values(rows().map(|m| m.price)),
                duration_minutes: FieldStatistics::from_values(rows().map(|m| f64::from(m.duration_minutes))),
                difficulty_level: FieldStatistics::from_values(rows().map(|m| f64::from(m.difficulty_level))),
                popularity_score: FieldStatistics::from_values(rows().map(|m| m.popularity_score)),
            })
        }
    }
}
