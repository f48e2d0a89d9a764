use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const DIFFICULTY_RANGE: std::ops::RangeInclusive<i32> = 0..=10;
pub const POPULARITY_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Fixed classification of a salon offering.
///
/// The Russian label is both the wire value and the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(64))")]
pub enum Category {
    #[sea_orm(string_value = "стрижка")]
    #[serde(rename = "стрижка")]
    Trim,
    #[sea_orm(string_value = "окрашивание")]
    #[serde(rename = "окрашивание")]
    Coloring,
    #[sea_orm(string_value = "лечение")]
    #[serde(rename = "лечение")]
    Treatment,
    #[sea_orm(string_value = "укладка")]
    #[serde(rename = "укладка")]
    Styling,
    #[sea_orm(string_value = "бритьё")]
    #[serde(rename = "бритьё")]
    Shaving,
    #[sea_orm(string_value = "маникюр")]
    #[serde(rename = "маникюр")]
    Manicure,
}

impl Category {
    pub fn label(&self) -> String {
        self.to_value()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: Category,
    pub price: f64,
    pub duration_minutes: i32,
    pub difficulty_level: i32,
    pub popularity_score: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name must not be empty".into()));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(errors::ModelError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}

pub fn validate_duration_minutes(minutes: i32) -> Result<(), errors::ModelError> {
    if minutes < 0 {
        return Err(errors::ModelError::Validation("duration_minutes must be >= 0".into()));
    }
    Ok(())
}

pub fn validate_difficulty_level(level: i32) -> Result<(), errors::ModelError> {
    if !DIFFICULTY_RANGE.contains(&level) {
        return Err(errors::ModelError::Validation(format!(
            "difficulty_level must be between {} and {}, got {level}",
            DIFFICULTY_RANGE.start(),
            DIFFICULTY_RANGE.end()
        )));
    }
    Ok(())
}

pub fn validate_popularity_score(score: f64) -> Result<(), errors::ModelError> {
    if !POPULARITY_RANGE.contains(&score) {
        return Err(errors::ModelError::Validation(format!(
            "popularity_score must be between {} and {}, got {score}",
            POPULARITY_RANGE.start(),
            POPULARITY_RANGE.end()
        )));
    }
    Ok(())
}

/// Unsaved row; the store assigns `id` on insert.
///
/// Does not validate. Callers run the `validate_*` checks first.
#[allow(clippy::too_many_arguments)]
pub fn new_active_model(
    name: &str,
    description: &str,
    category: Category,
    price: f64,
    duration_minutes: i32,
    difficulty_level: i32,
    popularity_score: f64,
) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        category: Set(category),
        price: Set(price),
        duration_minutes: Set(duration_minutes),
        difficulty_level: Set(difficulty_level),
        popularity_score: Set(popularity_score),
    }
}
