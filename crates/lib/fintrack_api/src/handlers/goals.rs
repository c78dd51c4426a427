//! Savings goal request handlers.
//!
//! Goals keep the original client's path-scoped routes
//! (`/api/goals/{user_id}[/{goal_id}]`) and its `msg` response key; the
//! path user id must match the verified identity.

use axum::Json;
use axum::extract::{Path, State};
use rust_decimal::Decimal;

use fintrack_core::goals;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthenticatedUser, ensure_owner};
use crate::models::{GoalRequest, GoalResponse};

fn validate_goal(body: &GoalRequest) -> AppResult<()> {
    if body.goal_name.is_empty() {
        return Err(AppError::Validation("Goal name is required".into()));
    }
    if body.target_amount <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Target amount must be greater than zero".into(),
        ));
    }
    Ok(())
}

/// `GET /api/goals/{user_id}` — list goals.
pub async fn list_goals_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<GoalResponse>>> {
    ensure_owner(&user, user_id)?;
    let rows = goals::list_goals(&state.pool, user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `POST /api/goals/{user_id}` — create a goal.
pub async fn add_goal_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
    Json(body): Json<GoalRequest>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_owner(&user, user_id)?;
    validate_goal(&body)?;

    let goal_id = goals::add_goal(
        &state.pool,
        user_id,
        &body.goal_name,
        body.target_amount,
        body.current_savings.unwrap_or(Decimal::ZERO),
        body.target_date,
    )
    .await?;

    Ok(Json(serde_json::json!({
        "msg": "Goal added successfully",
        "goalId": goal_id,
    })))
}

/// `PUT /api/goals/{user_id}/{goal_id}` — update a goal.
pub async fn update_goal_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path((user_id, goal_id)): Path<(i64, i64)>,
    Json(body): Json<GoalRequest>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_owner(&user, user_id)?;
    validate_goal(&body)?;

    let updated = goals::update_goal(
        &state.pool,
        user_id,
        goal_id,
        &body.goal_name,
        body.target_amount,
        body.current_savings.unwrap_or(Decimal::ZERO),
        body.target_date,
    )
    .await?;

    if !updated {
        return Err(AppError::NotFound("Goal not found or not authorized".into()));
    }
    Ok(Json(serde_json::json!({ "msg": "Goal updated successfully" })))
}

/// `DELETE /api/goals/{user_id}/{goal_id}` — delete a goal.
pub async fn delete_goal_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path((user_id, goal_id)): Path<(i64, i64)>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_owner(&user, user_id)?;

    let deleted = goals::delete_goal(&state.pool, user_id, goal_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Goal not found or not authorized".into()));
    }
    Ok(Json(serde_json::json!({ "msg": "Goal deleted successfully" })))
}
