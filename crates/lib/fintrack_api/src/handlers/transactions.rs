//! Transaction request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rust_decimal::Decimal;

use fintrack_core::transactions;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{MessageResponse, NewTransactionRequest, TransactionResponse};

/// `POST /api/transactions` — record a transaction for the authenticated
/// user.
pub async fn add_transaction_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<NewTransactionRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    if body.kind.is_empty() || body.category.is_empty() {
        return Err(AppError::Validation("Missing required fields".into()));
    }
    if body.kind != "income" && body.kind != "expense" {
        return Err(AppError::Validation(
            "Transaction type must be income or expense".into(),
        ));
    }
    if body.amount <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }

    transactions::add_transaction(
        &state.pool,
        user.0.sub,
        &body.kind,
        body.amount,
        &body.category,
        body.description.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Transaction added successfully".into(),
        }),
    ))
}

/// `GET /api/transactions` — list the authenticated user's transactions,
/// newest first.
pub async fn list_transactions_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<TransactionResponse>>> {
    let rows = transactions::list_transactions(&state.pool, user.0.sub).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
