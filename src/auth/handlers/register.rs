/**
 * Registration Handler
 *
 * Implements `POST /register`.
 *
 * # Registration Process
 *
 * 1. Validate username format and password length
 * 2. Check the username is not already taken
 * 3. Hash the password (bcrypt, cost 10)
 * 4. Persist the credential
 * 5. Return the public user view (201)
 *
 * # Security
 *
 * - The response never contains the password or its hash
 * - The raw password is never logged
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::password::hash_password;
use crate::auth::users::{create_user, get_user_by_username};
use crate::error::ApiError;

/// Validate username format.
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Registration handler.
///
/// # Errors
///
/// * `400 Bad Request` - invalid username format or password under 8 chars
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or persistence failure
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("registration request for username: {}", request.username);

    if !is_valid_username(&request.username) {
        tracing::warn!("invalid username format: {}", request.username);
        return Err(ApiError::BadRequest(
            "username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores".to_string(),
        ));
    }

    if request.password.len() < 8 {
        tracing::warn!("password too short for username: {}", request.username);
        return Err(ApiError::BadRequest(
            "password must be at least 8 characters".to_string(),
        ));
    }

    if get_user_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("username already exists: {}", request.username);
        return Err(ApiError::Conflict("username already taken".to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let user = create_user(&pool, request.username, password_hash).await?;

    tracing::info!("user created: {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
