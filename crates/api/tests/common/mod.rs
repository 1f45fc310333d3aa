#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use bloodbank_api::auth::jwt::JwtConfig;
use bloodbank_api::auth::password::hash_password;
use bloodbank_api::config::{LogFormat, ServerConfig};
use bloodbank_api::router::build_app_router;
use bloodbank_api::state::AppState;
use bloodbank_db::models::user::{CreateUser, User};
use bloodbank_db::repositories::UserRepo;

/// Password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        approval_adjusts_inventory: true,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        admin: None,
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Like [`build_test_app`] with a custom config.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Account kinds used by the tests.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    User,
    Staff,
    Admin,
}

/// Create a user directly through the repository with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str, kind: Kind) -> User {
    let (is_staff, is_superuser) = match kind {
        Kind::User => (false, false),
        Kind::Staff => (true, false),
        Kind::Admin => (true, true),
    };
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        first_name: "Test".to_string(),
        last_name: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        is_staff,
        is_superuser,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Log in via the API and return the full JSON response.
pub async fn login(app: Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    body_json(response).await
}

/// Create a user and return `(user, access_token)`.
pub async fn user_with_token(pool: &PgPool, username: &str, kind: Kind) -> (User, String) {
    let user = create_user(pool, username, kind).await;
    let json = login(build_test_app(pool.clone()), username, TEST_PASSWORD).await;
    let token = json["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string();
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
