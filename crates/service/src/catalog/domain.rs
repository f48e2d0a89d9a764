use models::{
    errors::ModelError,
    salon_service::{self, Category},
};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Create input; every field except `id` (assigned by the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub price: f64,
    pub duration_minutes: i32,
    pub difficulty_level: i32,
    pub popularity_score: f64,
}

impl ServiceCreate {
    pub fn validate(&self) -> Result<(), ModelError> {
        salon_service::validate_name(&self.name)?;
        salon_service::validate_price(self.price)?;
        salon_service::validate_duration_minutes(self.duration_minutes)?;
        salon_service::validate_difficulty_level(self.difficulty_level)?;
        salon_service::validate_popularity_score(self.popularity_score)?;
        Ok(())
    }
}

/// Partial update input. Absent and `null` fields both leave the stored value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub difficulty_level: Option<i32>,
    #[serde(default)]
    pub popularity_score: Option<f64>,
}

impl ServiceUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(n) = &self.name { salon_service::validate_name(n)?; }
        if let Some(p) = self.price { salon_service::validate_price(p)?; }
        if let Some(d) = self.duration_minutes { salon_service::validate_duration_minutes(d)?; }
        if let Some(d) = self.difficulty_level { salon_service::validate_difficulty_level(d)?; }
        if let Some(p) = self.popularity_score { salon_service::validate_popularity_score(p)?; }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.duration_minutes.is_none()
            && self.difficulty_level.is_none()
            && self.popularity_score.is_none()
    }

    /// Overwrite the supplied fields of an already loaded record.
    pub fn apply_to(&self, model: &mut salon_service::Model) {
        if let Some(n) = &self.name { model.name = n.clone(); }
        if let Some(d) = &self.description { model.description = d.clone(); }
        if let Some(c) = self.category { model.category = c; }
        if let Some(p) = self.price { model.price = p; }
        if let Some(d) = self.duration_minutes { model.duration_minutes = d; }
        if let Some(d) = self.difficulty_level { model.difficulty_level = d; }
        if let Some(p) = self.popularity_score { model.popularity_score = p; }
    }
}

/// Column a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Name,
    Price,
    DurationMinutes,
    DifficultyLevel,
    PopularityScore,
}

impl SortField {
    /// Unrecognized keys fall back to `Id`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            "price" => Self::Price,
            "duration_minutes" => Self::DurationMinutes,
            "difficulty_level" => Self::DifficultyLevel,
            "popularity_score" => Self::PopularityScore,
            _ => Self::Id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` sorts ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") { Self::Desc } else { Self::Asc }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

/// Equality filters; unset fields match every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub id: Option<i32>,
    pub category: Option<Category>,
}

impl ListFilter {
    pub fn matches(&self, model: &salon_service::Model) -> bool {
        !matches!(self.id, Some(id) if id != model.id)
            && !matches!(self.category, Some(c) if c != model.category)
    }
}

/// Listing request after query-string parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    pub pagination: Pagination,
    /// `None` keeps the store's iteration order.
    pub sort: Option<Sort>,
    pub filter: ListFilter,
}

impl ListParams {
    pub fn from_query(offset: Option<u64>, limit: Option<u64>, sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let sort = if sort_by.is_none() && sort_order.is_none() {
            None
        } else {
            Some(Sort {
                field: sort_by.map(SortField::parse).unwrap_or_default(),
                order: sort_order.map(SortOrder::parse).unwrap_or_default(),
            })
        };
        Self { pagination: Pagination::new(offset, limit), sort, filter: ListFilter::default() }
    }

    pub fn with_filter(mut self, filter: ListFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Aggregate over one numeric column. Every value is zero when there are no rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldStatistics {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: u64,
}

impl FieldStatistics {
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut count = 0u64;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return Self::default();
        }
        Self { average: sum / count as f64, min, max, count }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatistics {
    pub price: FieldStatistics,
    pub duration_minutes: FieldStatistics,
    pub difficulty_level: FieldStatistics,
    pub popularity_score: FieldStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_without_description_defaults_to_empty() {
        let input: ServiceCreate = serde_json::from_value(json!({
            "name": "Haircut", "category": "стрижка", "price": 20.0,
            "duration_minutes": 30, "difficulty_level": 2, "popularity_score": 7.5
        })).unwrap();
        assert_eq!(input.description, "");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_out_of_range_fails_validation() {
        let mut input: ServiceCreate = serde_json::from_value(json!({
            "name": "Haircut", "category": "стрижка", "price": 20.0,
            "duration_minutes": 30, "difficulty_level": 11, "popularity_score": 7.5
        })).unwrap();
        assert!(input.validate().is_err());
        input.difficulty_level = 2;
        input.popularity_score = -1.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_treats_null_as_absent() {
        let patch: ServiceUpdate = serde_json::from_value(json!({"price": 500.0, "name": null})).unwrap();
        assert_eq!(patch.price, Some(500.0));
        assert!(patch.name.is_none());
        assert!(!patch.is_empty());
        assert!(ServiceUpdate::default().is_empty());
    }

    #[test]
    fn update_apply_only_touches_supplied_fields() {
        let mut m = salon_service::Model {
            id: 1,
            name: "Haircut".into(),
            description: "d".into(),
            category: Category::Trim,
            price: 20.0,
            duration_minutes: 30,
            difficulty_level: 2,
            popularity_score: 7.5,
        };
        let before = m.clone();
        ServiceUpdate { price: Some(500.0), ..Default::default() }.apply_to(&mut m);
        assert_eq!(m.price, 500.0);
        assert_eq!(salon_service::Model { price: before.price, ..m.clone() }, before);
    }

    #[test]
    fn update_rejects_invalid_supplied_field() {
        let patch = ServiceUpdate { difficulty_level: Some(42), ..Default::default() };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn sort_parsing_falls_back() {
        assert_eq!(SortField::parse("price"), SortField::Price);
        assert_eq!(SortField::parse("bogus"), SortField::Id);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    }

    #[test]
    fn list_params_without_sort_keys_keep_store_order() {
        assert_eq!(ListParams::from_query(None, None, None, None).sort, None);
        let p = ListParams::from_query(Some(2), Some(3), None, Some("desc"));
        assert_eq!(p.sort, Some(Sort { field: SortField::Id, order: SortOrder::Desc }));
        assert_eq!(p.pagination, Pagination { offset: 2, limit: 3 });
    }

    #[test]
    fn filter_matches_on_every_set_field() {
        let m = salon_service::Model {
            id: 4,
            name: "Manicure".into(),
            description: String::new(),
            category: Category::Manicure,
            price: 15.0,
            duration_minutes: 40,
            difficulty_level: 3,
            popularity_score: 8.0,
        };
        assert!(ListFilter::default().matches(&m));
        assert!(ListFilter { id: Some(4), category: Some(Category::Manicure) }.matches(&m));
        assert!(!ListFilter { id: Some(5), category: None }.matches(&m));
        assert!(!ListFilter { id: Some(4), category: Some(Category::Trim) }.matches(&m));
    }

    #[test]
    fn statistics_of_nothing_are_zero() {
        assert_eq!(FieldStatistics::from_values(std::iter::empty()), FieldStatistics::default());
        let s = FieldStatistics::from_values([1.0, 2.0, 6.0]);
        assert_eq!(s, FieldStatistics { average: 3.0, min: 1.0, max: 6.0, count: 3 });
    }
}
