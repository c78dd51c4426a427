//! Request and response bodies for the HTTP API.
//!
//! Field names follow the client contract: auth endpoints use camelCase
//! (`userId`), finance rows mirror their store columns, and the
//! transaction kind is exposed as `type`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fintrack_core::budgets::BudgetRow;
use fintrack_core::goals::GoalRow;
use fintrack_core::reports::{MonthlyDataRow, ReportRow};
use fintrack_core::transactions::TransactionRow;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Generic success body for write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Non-sensitive user summary returned by login and dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: AuthUser,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransactionRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub category: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub transaction_date: DateTime<Utc>,
}

impl From<TransactionRow> for TransactionResponse {
    fn from(row: TransactionRow) -> Self {
        Self {
            id: row.id,
            kind: row.kind,
            amount: row.amount,
            category: row.category,
            description: row.description,
            transaction_date: row.transaction_date,
        }
    }
}

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudgetRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: Decimal,
    pub month: Option<i16>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub id: i64,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub month: i16,
    pub year: i32,
}

impl From<BudgetRow> for BudgetResponse {
    fn from(row: BudgetRow) -> Self {
        Self {
            id: row.id,
            category: row.category,
            amount: row.amount,
            month: row.month,
            year: row.year,
        }
    }
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRequest {
    #[serde(default)]
    pub goal_name: String,
    #[serde(default)]
    pub target_amount: Decimal,
    pub current_savings: Option<Decimal>,
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResponse {
    pub id: i64,
    pub user_id: i64,
    pub goal_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_savings: Decimal,
    pub target_date: Option<NaiveDate>,
}

impl From<GoalRow> for GoalResponse {
    fn from(row: GoalRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            goal_name: row.goal_name,
            target_amount: row.target_amount,
            current_savings: row.current_savings,
            target_date: row.target_date,
        }
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRowResponse {
    pub period: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
}

impl From<ReportRow> for ReportRowResponse {
    fn from(row: ReportRow) -> Self {
        Self {
            period: row.period,
            income: row.income,
            expenses: row.expenses,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(rename = "budgetStatus")]
    pub budget_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyDataResponse {
    pub month: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
}

impl From<MonthlyDataRow> for MonthlyDataResponse {
    fn from(row: MonthlyDataRow) -> Self {
        Self {
            month: row.month,
            income: row.income,
            expenses: row.expenses,
        }
    }
}
