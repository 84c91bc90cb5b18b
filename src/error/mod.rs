/**
 * API Error Types
 *
 * This module defines the error type returned from HTTP handlers and the
 * single place where internal failures are mapped to HTTP responses.
 *
 * # Propagation Policy
 *
 * Internal distinctions (which verification step failed, whether a username
 * existed, what the database said) are preserved for logging but never
 * echoed to the caller:
 *
 * - All authentication failures collapse to one 401 with a generic body
 * - All server faults (database, hashing, signing) collapse to one 500
 * - Client-input problems (400/404/409) carry a short message
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use crate::auth::password::HashingError;
use crate::auth::token::TokenError;

/// Errors surfaced by HTTP handlers and middleware.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request is not authenticated. Deliberately carries no cause:
    /// missing header, bad signature, expiry, unknown user, and wrong
    /// password all look identical from the outside.
    #[error("unauthorized")]
    Unauthorized,

    /// Invalid request input
    #[error("{0}")]
    BadRequest(String),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with existing state (e.g. duplicate username)
    #[error("{0}")]
    Conflict(String),

    /// Database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing primitive failure
    #[error("password hashing error: {0}")]
    Hashing(#[from] HashingError),

    /// Token signing primitive failure
    #[error("token signing error: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            // Signing failures are server faults; everything else about a
            // presented token is an authentication failure.
            TokenError::Signing(inner) => ApiError::Signing(inner),
            TokenError::Malformed | TokenError::BadSignature | TokenError::Expired => {
                ApiError::Unauthorized
            }
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Hashing(_) | Self::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to return to the caller.
    fn public_message(&self) -> String {
        match self {
            Self::Unauthorized => "unauthorized".to_string(),
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::Conflict(msg) => msg.clone(),
            Self::Database(_) | Self::Hashing(_) | Self::Signing(_) => {
                "internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(err) => tracing::error!("database error: {err:?}"),
            Self::Hashing(err) => tracing::error!("password hashing error: {err:?}"),
            Self::Signing(err) => tracing::error!("token signing error: {err:?}"),
            _ => {}
        }

        let status = self.status_code();
        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}
