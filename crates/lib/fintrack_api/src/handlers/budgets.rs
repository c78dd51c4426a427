//! Budget request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rust_decimal::Decimal;

use fintrack_core::budgets;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{BudgetResponse, MessageResponse, NewBudgetRequest};

/// `POST /api/budgets` — set a monthly budget for the authenticated user.
pub async fn add_budget_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<NewBudgetRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (Some(month), Some(year)) = (body.month, body.year) else {
        return Err(AppError::Validation("Missing required fields".into()));
    };
    if body.category.is_empty() {
        return Err(AppError::Validation("Missing required fields".into()));
    }
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation("Month must be between 1 and 12".into()));
    }
    if body.amount <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }

    budgets::add_budget(&state.pool, user.0.sub, &body.category, body.amount, month, year)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Budget added successfully".into(),
        }),
    ))
}

/// `GET /api/budgets` — list the authenticated user's budgets.
pub async fn list_budgets_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<BudgetResponse>>> {
    let rows = budgets::list_budgets(&state.pool, user.0.sub).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
