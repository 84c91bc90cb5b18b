/**
 * Application State
 *
 * Central state container for the Axum application, with `FromRef`
 * implementations so handlers can extract just the piece they need.
 *
 * # Thread Safety
 *
 * Both fields are cheap to clone and safe for unsynchronized concurrent
 * use: the pool is internally synchronized and `AuthKeys` is immutable
 * after startup.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::token::AuthKeys;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Token signing/verification keys, built once from the configured
    /// secret
    pub auth_keys: AuthKeys,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AuthKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_keys.clone()
    }
}
