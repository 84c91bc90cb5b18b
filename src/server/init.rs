/**
 * Server Initialization
 *
 * Builds the application from configuration: connects the database pool,
 * runs migrations, derives the signing keys, and assembles the router.
 *
 * Unlike the status-page style of degraded startup, the database here is
 * required: every route either persists credentials or serves persisted
 * rows, so a missing store is a startup failure, not a warning.
 */

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

use crate::auth::token::AuthKeys;
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// # Errors
///
/// Fails if the database cannot be reached or migrations cannot be applied.
pub async fn create_app(config: &ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("connecting to database");
    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&db_pool).await?;

    let app_state = AppState {
        db_pool,
        auth_keys: AuthKeys::new(&config.jwt_secret),
    };

    tracing::info!("router configured");
    Ok(create_router(app_state))
}
