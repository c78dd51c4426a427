//! Report request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use rust_decimal::Decimal;
use serde::Deserialize;

use fintrack_core::reports;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthenticatedUser, ensure_owner};
use crate::models::{MonthlyDataResponse, ReportRowResponse, SummaryResponse};

/// Query parameters for `GET /api/reports/{type}/{user_id}`.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub year: Option<i32>,
}

/// `GET /api/reports/{type}/{user_id}?year=YYYY` — monthly or yearly
/// income/expense totals for one year.
pub async fn report_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path((report_type, user_id)): Path<(String, i64)>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<ReportRowResponse>>> {
    ensure_owner(&user, user_id)?;

    let year = query
        .year
        .ok_or_else(|| AppError::Validation("User ID and year are required".into()))?;

    let rows = match report_type.as_str() {
        "monthly" => reports::monthly_report(&state.pool, user_id, year).await?,
        "yearly" => reports::yearly_report(&state.pool, user_id, year).await?,
        _ => {
            return Err(AppError::Validation(
                "Invalid report type. Must be monthly or yearly.".into(),
            ));
        }
    };

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `GET /api/financial-summary/{user_id}` — current-month totals and
/// budget status for the dashboard.
pub async fn financial_summary_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<SummaryResponse>> {
    ensure_owner(&user, user_id)?;

    let totals = reports::current_month_summary(&state.pool, user_id).await?;
    let balance = totals.income - totals.expenses;
    let budget_status = if balance >= Decimal::ZERO {
        "On Track"
    } else {
        "Over Budget"
    };

    Ok(Json(SummaryResponse {
        income: totals.income,
        expenses: totals.expenses,
        balance,
        budget_status: budget_status.into(),
    }))
}

/// `GET /api/monthly-data/{user_id}` — month-bucketed totals for the
/// dashboard chart.
pub async fn monthly_data_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<MonthlyDataResponse>>> {
    ensure_owner(&user, user_id)?;

    let rows = reports::monthly_data(&state.pool, user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
