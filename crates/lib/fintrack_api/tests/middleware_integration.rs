//! Router-level middleware tests.
//!
//! These requests are all rejected (or answered) before any query runs,
//! so the pool is built lazily and no database is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use fintrack_api::{AppState, config::ApiConfig};
use fintrack_core::models::auth::TokenClaims;
use jsonwebtoken::{EncodingKey, Header, encode};
use tower::ServiceExt;

const SECRET: &str = "test-secret";

fn test_app() -> axum::Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/fintrack_test")
        .expect("lazy pool");
    let state = AppState {
        pool,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: "postgres://localhost:5432/fintrack_test".into(),
            jwt_secret: SECRET.into(),
        },
    };
    fintrack_api::router(state)
}

async fn get_dashboard(auth_header: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().uri("/api/auth/dashboard");
    if let Some(value) = auth_header {
        builder = builder.header("authorization", value);
    }
    let req = builder.body(Body::empty()).expect("request");

    let resp = test_app().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("parse JSON");
    (status, json)
}

fn signed_token(secret: &str, exp: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: 1,
        email: "ann@x.com".into(),
        exp,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encode token")
}

#[tokio::test]
async fn health_works_without_auth() {
    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .expect("request");

    let resp = test_app().oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("parse JSON");
    assert_eq!(json["status"], "OK");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn missing_header_is_401() {
    let (status, body) = get_dashboard(None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "token_missing");
}

#[tokio::test]
async fn malformed_scheme_is_401() {
    let (status, body) = get_dashboard(Some("Basic abc123")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "token_malformed");
}

#[tokio::test]
async fn garbage_token_is_403() {
    let (status, body) = get_dashboard(Some("Bearer not.a.token")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "token_invalid");
}

#[tokio::test]
async fn wrongly_signed_token_is_403() {
    let now = Utc::now().timestamp();
    let token = signed_token("some-other-secret", now + 3600);
    let (status, body) = get_dashboard(Some(&format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "token_invalid");
}

#[tokio::test]
async fn expired_token_is_403() {
    // Past expiry and past the verifier's 60 s leeway.
    let now = Utc::now().timestamp();
    let token = signed_token(SECRET, now - 7200);
    let (status, body) = get_dashboard(Some(&format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "token_expired");
}
