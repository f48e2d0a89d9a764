use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use common::types::Ack;
use models::salon_service::{self, Category};
use service::catalog::domain::{ListFilter, ListParams, ServiceCreate, ServiceStatistics, ServiceUpdate};

use crate::errors::{AppJson, AppPath, AppQuery, JsonApiError};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    pub offset: Option<u64>,
    /// Rows to return (default 100, at most 1000)
    pub limit: Option<u64>,
    /// id | name | price | duration_minutes | difficulty_level | popularity_score
    pub sort_by: Option<String>,
    /// asc | desc
    pub sort_order: Option<String>,
    /// Only the service with this id
    pub id: Option<i32>,
    /// Only services in this category
    #[param(value_type = Option<String>)]
    pub category: Option<Category>,
}

impl From<&ListQuery> for ListParams {
    fn from(q: &ListQuery) -> Self {
        ListParams::from_query(q.offset, q.limit, q.sort_by.as_deref(), q.sort_order.as_deref())
            .with_filter(ListFilter { id: q.id, category: q.category })
    }
}

#[utoipa::path(
    get, path = "/services", tag = "services",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of services", body = [crate::openapi::ServiceDoc]),
        (status = 400, description = "Invalid Query", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<ListQuery>) -> Result<Json<Vec<salon_service::Model>>, JsonApiError> {
    let rows = state.catalog.list(ListParams::from(&q)).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/services/statistics", tag = "services",
    responses(
        (status = 200, description = "Average, min, max and count per numeric field", body = crate::openapi::ServiceStatisticsDoc),
        (status = 500, description = "Store Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn statistics(State(state): State<ServerState>) -> Result<Json<ServiceStatistics>, JsonApiError> {
    Ok(Json(state.catalog.statistics().await?))
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Json<salon_service::Model>, JsonApiError> {
    Ok(Json(state.catalog.get(id).await?))
}

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::ServiceCreateDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<ServiceCreate>) -> Result<Json<salon_service::Model>, JsonApiError> {
    info!(name = %input.name, category = %input.category, "service_create_request");
    Ok(Json(state.catalog.create(input).await?))
}

#[utoipa::path(
    patch, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    request_body = crate::openapi::ServiceUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i32>,
    AppJson(patch): AppJson<ServiceUpdate>,
) -> Result<Json<salon_service::Model>, JsonApiError> {
    Ok(Json(state.catalog.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::AckDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Json<Ack>, JsonApiError> {
    state.catalog.delete(id).await?;
    Ok(Json(Ack { ok: true }))
}
