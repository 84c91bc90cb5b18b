/**
 * Authorization Gate
 *
 * Middleware protecting routes that require authentication. It reads the
 * bearer credential from the `Authorization` header, verifies it, and
 * attaches the resolved identity to the request before the inner handler
 * runs. On any failure the inner handler never runs and no side effects
 * occur.
 *
 * # Rejection Policy
 *
 * Missing header, malformed token, bad signature, expiry, and an
 * unparseable subject all produce the same 401 response. The specific
 * cause is logged server-side only, so callers cannot probe which
 * verification step failed.
 *
 * # Identity Propagation
 *
 * The verified subject travels as a typed request-extension value
 * (`AuthenticatedUser`), created per request and dropped with it. It is
 * never written back into a header the client could also have set.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::token::AuthKeys;
use crate::error::ApiError;

/// Verified identity attached to a request by the gate.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authorization gate middleware.
///
/// Applied with `middleware::from_fn_with_state` to the protected
/// sub-routers only. Verification is stateless: signature and expiry
/// checks only, no credential-store lookup per request.
pub async fn require_auth(
    State(keys): State<AuthKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::Unauthorized
        })?;

    // Tolerate a bare token: strip the scheme prefix when present but
    // accept the value as-is otherwise.
    let token = header.strip_prefix("Bearer ").unwrap_or(header);

    let claims = keys.verify(token).map_err(|err| {
        tracing::warn!("token rejected: {err}");
        ApiError::from(err)
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|err| {
        // A signed token with a non-UUID subject is still an invalid
        // credential as far as the caller is concerned.
        tracing::warn!("token subject is not a valid user id: {err}");
        ApiError::Unauthorized
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by `require_auth`.
///
/// Handlers on protected routes take `AuthUser` as a parameter to read the
/// verified subject. Rejects with 401 if the gate did not run.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::state::AppState;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use chrono::{Duration, Utc};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    async fn test_state() -> AppState {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        AppState {
            db_pool: pool,
            auth_keys: AuthKeys::new("test-secret"),
        }
    }

    async fn whoami(AuthUser(user): AuthUser) -> String {
        user.user_id.to_string()
    }

    async fn protected_app() -> (Router, AuthKeys) {
        let state = test_state().await;
        let keys = state.auth_keys.clone();
        let app = Router::new()
            .route("/protected", get(whoami))
            .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .with_state(state);
        (app, keys)
    }

    fn request_with_auth(value: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri("/protected");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let (app, _) = protected_app().await;
        let response = app.oneshot(request_with_auth(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let (app, _) = protected_app().await;
        let response = app
            .oneshot(request_with_auth(Some("Bearer not-a-token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let (app, keys) = protected_app().await;
        let user_id = Uuid::new_v4();
        let token = keys.issue(&user_id.to_string()).unwrap();

        let response = app
            .oneshot(request_with_auth(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, user_id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn test_bare_token_without_scheme_is_accepted() {
        let (app, keys) = protected_app().await;
        let user_id = Uuid::new_v4();
        let token = keys.issue(&user_id.to_string()).unwrap();

        let response = app.oneshot(request_with_auth(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let (app, keys) = protected_app().await;
        let issued = Utc::now() - Duration::hours(25);
        let token = keys
            .issue_at(&Uuid::new_v4().to_string(), issued)
            .unwrap();

        let response = app
            .oneshot(request_with_auth(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_uuid_subject_is_rejected() {
        let (app, keys) = protected_app().await;
        let token = keys.issue("42").unwrap();

        let response = app
            .oneshot(request_with_auth(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
