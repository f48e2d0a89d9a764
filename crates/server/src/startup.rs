use axum::Router;
use common::{env::ensure_sqlite_dir, utils::logging::init_logging_from_env};
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the SQLite store, create the `services` table if absent and wire the catalog.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    ensure_sqlite_dir(&cfg.database.url).await?;
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    // creates `services` if absent; a no-op on later starts
    migration::Migrator::up(&db, None).await?;
    info!(url = %cfg.database.url, "catalog store ready");
    Ok(ServerState::from_connection(db))
}

/// Router with the production CORS policy.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    // .env before anything reads the environment
    dotenv().ok();
    init_logging_from_env();

    // config.toml when present, otherwise SERVER_HOST / SERVER_PORT / DATABASE_URL
    let cfg = AppConfig::load_or_env()?;
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    // bind, then serve until Ctrl+C; in-flight requests finish first
    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting salon catalog server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
