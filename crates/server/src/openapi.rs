use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct WelcomeResponse { pub message: String }

#[derive(ToSchema)]
pub struct AckDoc { pub ok: bool }

#[derive(ToSchema)]
pub struct ErrorBody { pub error: String, pub detail: Option<String> }

/// One of: стрижка, окрашивание, лечение, укладка, бритьё, маникюр
#[derive(Serialize, ToSchema)]
pub enum CategoryDoc {
    #[serde(rename = "стрижка")]
    Trim,
    #[serde(rename = "окрашивание")]
    Coloring,
    #[serde(rename = "лечение")]
    Treatment,
    #[serde(rename = "укладка")]
    Styling,
    #[serde(rename = "бритьё")]
    Shaving,
    #[serde(rename = "маникюр")]
    Manicure,
}

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: CategoryDoc,
    pub price: f64,
    pub duration_minutes: i32,
    pub difficulty_level: i32,
    pub popularity_score: f64,
}

#[derive(ToSchema)]
pub struct ServiceCreateDoc {
    pub name: String,
    pub description: Option<String>,
    pub category: CategoryDoc,
    #[schema(minimum = 0.0)]
    pub price: f64,
    #[schema(minimum = 0)]
    pub duration_minutes: i32,
    #[schema(minimum = 0, maximum = 10)]
    pub difficulty_level: i32,
    #[schema(minimum = 0.0, maximum = 10.0)]
    pub popularity_score: f64,
}

#[derive(ToSchema)]
pub struct ServiceUpdateDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<CategoryDoc>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub difficulty_level: Option<i32>,
    pub popularity_score: Option<f64>,
}

#[derive(ToSchema)]
pub struct FieldStatisticsDoc {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: u64,
}

#[derive(ToSchema)]
pub struct ServiceStatisticsDoc {
    pub price: FieldStatisticsDoc,
    pub duration_minutes: FieldStatisticsDoc,
    pub difficulty_level: FieldStatisticsDoc,
    pub popularity_score: FieldStatisticsDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home,
        crate::routes::health,
        crate::routes::services::list,
        crate::routes::services::statistics,
        crate::routes::services::get,
        crate::routes::services::create,
        crate::routes::services::update,
        crate::routes::services::delete,
    ),
    components(
        schemas(
            HealthResponse,
            WelcomeResponse,
            AckDoc,
            ErrorBody,
            CategoryDoc,
            ServiceDoc,
            ServiceCreateDoc,
            ServiceUpdateDoc,
            FieldStatisticsDoc,
            ServiceStatisticsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/services", "/services/statistics", "/services/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
