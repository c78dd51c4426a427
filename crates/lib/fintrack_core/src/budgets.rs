//! Monthly budget persistence.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Row returned by budget queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BudgetRow {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub amount: Decimal,
    pub month: i16,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

/// Set a budget for a category and month, returning the stored row.
pub async fn add_budget(
    pool: &PgPool,
    user_id: i64,
    category: &str,
    amount: Decimal,
    month: i16,
    year: i32,
) -> Result<BudgetRow, sqlx::Error> {
    sqlx::query_as::<_, BudgetRow>(
        r#"
        INSERT INTO budgets (user_id, category, amount, month, year)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, category, amount, month, year, created_at
        "#,
    )
    .bind(user_id)
    .bind(category)
    .bind(amount)
    .bind(month)
    .bind(year)
    .fetch_one(pool)
    .await
}

/// List a user's budgets, most recent period first.
pub async fn list_budgets(pool: &PgPool, user_id: i64) -> Result<Vec<BudgetRow>, sqlx::Error> {
    sqlx::query_as::<_, BudgetRow>(
        r#"
        SELECT id, user_id, category, amount, month, year, created_at
        FROM budgets
        WHERE user_id = $1
        ORDER BY year DESC, month DESC, category ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
