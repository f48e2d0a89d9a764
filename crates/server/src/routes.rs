use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Welcome};

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod services;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Welcome message", body = crate::openapi::WelcomeResponse)))]
pub async fn home() -> Json<Welcome> {
    Json(Welcome::salon())
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: landing page, health, docs and the catalog
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // `/services/statistics` is a static segment and wins over `/services/:id`
    let catalog = Router::new()
        .route("/services", get(services::list).post(services::create))
        .route("/services/statistics", get(services::statistics))
        .route(
            "/services/:id",
            get(services::get).patch(services::update).delete(services::delete),
        );

    public
        .merge(catalog)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
