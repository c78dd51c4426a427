//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{AuthUser, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::auth;

/// `POST /api/auth/register` — create a new user account.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let resp = auth::register(&state.pool, &body.name, &body.email, &body.password).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `POST /api/auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(
        &state.pool,
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}

/// `GET /api/auth/dashboard` — profile of the authenticated user.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<AuthUser>> {
    let resp = auth::get_profile(&state.pool, user.0.sub).await?;
    Ok(Json(resp))
}
