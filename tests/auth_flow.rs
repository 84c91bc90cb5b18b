//! End-to-end authentication flow tests
//!
//! Full register -> login -> protected request scenario against the real
//! router with an in-memory database, including expiry simulation and the
//! uniform-failure property of login.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use orderdesk::auth::token::AuthKeys;
use orderdesk::routes::create_router;
use orderdesk::server::state::AppState;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

async fn build_app() -> (Router, AuthKeys) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();

    let keys = AuthKeys::new("test-secret");
    let state = AppState {
        db_pool: pool,
        auth_keys: keys.clone(),
    };
    (create_router(state), keys)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get_with_auth(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = auth {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_complete_auth_flow() {
    let (app, keys) = build_app().await;

    // Step 1: register alice
    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({ "username": "alice", "password": "s3cret!!" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let registered = body_json(response).await;
    assert_eq!(registered["username"], "alice");
    // The password hash must not leak into the response
    assert!(registered.get("password").is_none());
    assert!(registered.get("password_hash").is_none());

    // Step 2: login with the correct password
    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({ "username": "alice", "password": "s3cret!!" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(!token.is_empty());

    // Step 3: the token opens a protected route
    let response = app
        .clone()
        .oneshot(get_with_auth("/customers", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Step 4: the same request 24 hours later (simulated clock) is rejected
    let subject = keys.verify(&token).unwrap().sub;
    let stale = keys
        .issue_at(&subject, Utc::now() - Duration::hours(24))
        .unwrap();
    let response = app
        .clone()
        .oneshot(get_with_auth("/customers", Some(&format!("Bearer {stale}"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Step 5: wrong password is rejected with a generic failure
    let response = app
        .oneshot(post_json(
            "/login",
            json!({ "username": "alice", "password": "wrong" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (app, _) = build_app().await;

    app.clone()
        .oneshot(post_json(
            "/register",
            json!({ "username": "alice", "password": "s3cret!!" }),
        ))
        .await
        .unwrap();

    let wrong_password = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({ "username": "alice", "password": "wrong" }),
        ))
        .await
        .unwrap();
    let unknown_user = app
        .oneshot(post_json(
            "/login",
            json!({ "username": "mallory", "password": "s3cret!!" }),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // Same status and byte-identical bodies: no user-enumeration oracle
    let body_a = body_json(wrong_password).await;
    let body_b = body_json(unknown_user).await;
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let (app, _) = build_app().await;

    let first = app
        .clone()
        .oneshot(post_json(
            "/register",
            json!({ "username": "alice", "password": "s3cret!!" }),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(post_json(
            "/register",
            json!({ "username": "alice", "password": "different1" }),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_protected_routes_reject_missing_and_foreign_tokens() {
    let (app, _) = build_app().await;

    // No header at all
    let response = app
        .clone()
        .oneshot(get_with_auth("/customers", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Token signed under a different secret
    let foreign = AuthKeys::new("other-secret")
        .issue(&uuid::Uuid::new_v4().to_string())
        .unwrap();
    let response = app
        .clone()
        .oneshot(get_with_auth("/orders", Some(&format!("Bearer {foreign}"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Rejection bodies carry no internal detail
    let response = app
        .oneshot(get_with_auth("/customers", Some("Bearer garbage")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!({ "error": "unauthorized" }));
}
