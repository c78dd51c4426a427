//! Shared helpers for database-backed integration tests.
//!
//! Flows run against `DATABASE_URL` and skip (with a note) when no
//! database is reachable, so the suite stays green without Postgres.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fintrack_api::{AppState, config::ApiConfig};
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";

/// Build the router against the configured database, or skip the test.
pub async fn test_app() -> Option<Router> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("skipping: DATABASE_URL not set");
        return None;
    };
    let pool = match sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(&url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("skipping: database unreachable: {e}");
            return None;
        }
    };
    fintrack_api::migrate(&pool).await.expect("migrate");

    let state = AppState {
        pool,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: url,
            jwt_secret: SECRET.into(),
        },
    };
    Some(fintrack_api::router(state))
}

/// Unique email per call; emails are unique across all users.
pub fn unique_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    format!("{tag}-{nanos}@example.com")
}

/// Issue one request against the router, returning status and JSON body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).expect("serialize")))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse JSON")
    };
    (status, json)
}

/// Register and log in a fresh user, returning (user_id, email, token).
pub async fn register_and_login(app: &Router, tag: &str) -> (i64, String, String) {
    let email = unique_email(tag);
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({"name": "Ann", "email": email, "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    let user_id = body["userId"].as_i64().expect("numeric userId");

    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({"email": email, "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    let token = body["token"].as_str().expect("token").to_string();

    (user_id, email, token)
}
