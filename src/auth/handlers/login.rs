/**
 * Login Handler
 *
 * Implements `POST /login`.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a signed token bound to the user id
 *
 * # Security
 *
 * - Unknown username and wrong password produce the same 401 response, so
 *   callers cannot enumerate accounts; the distinction exists only in logs
 * - The unknown-username branch still verifies against a dummy hash, so
 *   response latency does not reveal whether the account exists either
 * - Password verification is constant-time (inside bcrypt)
 * - Raw passwords are never logged
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::password::verify_password;
use crate::auth::token::AuthKeys;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;

/// A structurally valid bcrypt hash (cost 10, matching stored hashes) used
/// to keep the unknown-username branch as slow as a real verification.
const TIMING_DUMMY_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Login handler.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown username or wrong password, with an
///   identical response body for both
/// * `500 Internal Server Error` - database, hashing, or signing failure
pub async fn login(
    State(pool): State<SqlitePool>,
    State(keys): State<AuthKeys>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("login request for username: {}", request.username);

    let Some(user) = get_user_by_username(&pool, &request.username).await? else {
        tracing::warn!("login failed, unknown username: {}", request.username);
        // Burn one bcrypt verification anyway so this branch takes as long
        // as a wrong-password attempt against a real account.
        let _ = verify_password(&request.password, TIMING_DUMMY_HASH);
        return Err(ApiError::Unauthorized);
    };

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("login failed, wrong password for: {}", request.username);
        return Err(ApiError::Unauthorized);
    }

    let token = keys.issue(&user.id.to_string())?;

    tracing::info!("user logged in: {} ({})", user.username, user.id);

    Ok(Json(TokenResponse { token }))
}
