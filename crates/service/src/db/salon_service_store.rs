use sea_orm::{
    sea_query::{Alias, Expr, Func, FunctionCall, SimpleExpr},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, Order,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use models::salon_service::{self, Entity as ServiceEntity};

use crate::catalog::domain::{FieldStatistics, ListParams, ServiceCreate, ServiceStatistics, ServiceUpdate, SortField, SortOrder};
use crate::errors::ServiceError;

fn sort_column(field: SortField) -> salon_service::Column {
    match field {
        SortField::Id => salon_service::Column::Id,
        SortField::Name => salon_service::Column::Name,
        SortField::Price => salon_service::Column::Price,
        SortField::DurationMinutes => salon_service::Column::DurationMinutes,
        SortField::DifficultyLevel => salon_service::Column::DifficultyLevel,
        SortField::PopularityScore => salon_service::Column::PopularityScore,
    }
}

impl From<SortOrder> for Order {
    fn from(o: SortOrder) -> Self {
        match o {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// List services in one offset/limit window, optionally filtered and ordered.
pub async fn list_services<C: ConnectionTrait>(conn: &C, params: &ListParams) -> Result<Vec<salon_service::Model>, ServiceError> {
    let (offset, limit) = params.pagination.normalize();
    let mut finder = ServiceEntity::find();
    if let Some(id) = params.filter.id {
        finder = finder.filter(salon_service::Column::Id.eq(id));
    }
    if let Some(category) = params.filter.category {
        finder = finder.filter(salon_service::Column::Category.eq(category));
    }
    if let Some(sort) = params.sort {
        finder = finder.order_by(sort_column(sort.field), sort.order.into());
        // ties keep a stable order
        if sort.field != SortField::Id {
            finder = finder.order_by_asc(salon_service::Column::Id);
        }
    }
    let rows = finder.offset(offset).limit(limit).all(conn).await?;
    Ok(rows)
}

/// Get a service by id.
pub async fn get_service<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<salon_service::Model>, ServiceError> {
    Ok(ServiceEntity::find_by_id(id).one(conn).await?)
}

/// Insert an already validated service; the store assigns the id.
pub async fn insert_service<C: ConnectionTrait>(conn: &C, input: &ServiceCreate) -> Result<salon_service::Model, ServiceError> {
    let am = salon_service::new_active_model(
        &input.name,
        &input.description,
        input.category,
        input.price,
        input.duration_minutes,
        input.difficulty_level,
        input.popularity_score,
    );
    Ok(am.insert(conn).await?)
}

/// Patch the supplied fields of an already validated update; `None` when the id is unknown.
pub async fn update_service<C: ConnectionTrait>(conn: &C, id: i32, patch: &ServiceUpdate) -> Result<Option<salon_service::Model>, ServiceError> {
    let Some(existing) = ServiceEntity::find_by_id(id).one(conn).await? else { return Ok(None); };
    let mut am: salon_service::ActiveModel = existing.clone().into();
    if let Some(n) = &patch.name { am.name = Set(n.clone()); }
    if let Some(d) = &patch.description { am.description = Set(d.clone()); }
    if let Some(c) = patch.category { am.category = Set(c); }
    if let Some(p) = patch.price { am.price = Set(p); }
    if let Some(d) = patch.duration_minutes { am.duration_minutes = Set(d); }
    if let Some(d) = patch.difficulty_level { am.difficulty_level = Set(d); }
    if let Some(p) = patch.popularity_score { am.popularity_score = Set(p); }
    if !am.is_changed() {
        return Ok(Some(existing));
    }
    Ok(Some(am.update(conn).await?))
}

/// Delete a service; returns true if a row was removed.
pub async fn delete_service<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, ServiceError> {
    let res = ServiceEntity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected > 0)
}

#[derive(Debug, FromQueryResult)]
struct AggregateRow {
    average: Option<f64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    total: i64,
}

// integer columns would otherwise come back as INTEGER from MIN/MAX
fn as_real(call: FunctionCall) -> SimpleExpr {
    Func::cast_as(call, Alias::new("REAL")).into()
}

/// AVG/MIN/MAX/COUNT over one column; an empty table yields zeros.
pub async fn field_statistics<C: ConnectionTrait>(conn: &C, column: salon_service::Column) -> Result<FieldStatistics, DbErr> {
    let row = ServiceEntity::find()
        .select_only()
        .column_as(as_real(Func::avg(Expr::col(column))), "average")
        .column_as(as_real(Func::min(Expr::col(column))), "minimum")
        .column_as(as_real(Func::max(Expr::col(column))), "maximum")
        .column_as(SimpleExpr::from(Func::count(Expr::col(column))), "total")
        .into_model::<AggregateRow>()
        .one(conn)
        .await?;

    Ok(match row {
        Some(r) if r.total > 0 => FieldStatistics {
            average: r.average.unwrap_or_default(),
            min: r.minimum.unwrap_or_default(),
            max: r.maximum.unwrap_or_default(),
            count: r.total as u64,
        },
        _ => FieldStatistics::default(),
    })
}

/// Statistics for every numeric column.
pub async fn service_statistics<C: ConnectionTrait>(conn: &C) -> Result<ServiceStatistics, ServiceError> {
    Ok(ServiceStatistics {
        price: field_statistics(conn, salon_service::Column::Price).await?,
        duration_minutes: field_statistics(conn, salon_service::Column::DurationMinutes).await?,
        difficulty_level: field_statistics(conn, salon_service::Column::DifficultyLevel).await?,
        popularity_score: field_statistics(conn, salon_service::Column::PopularityScore).await?,
    })
}
