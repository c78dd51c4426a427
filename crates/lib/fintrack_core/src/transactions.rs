//! Transaction persistence.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Row returned by transaction queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub transaction_date: DateTime<Utc>,
}

/// Record a transaction for a user, returning the stored row.
pub async fn add_transaction(
    pool: &PgPool,
    user_id: i64,
    kind: &str,
    amount: Decimal,
    category: &str,
    description: Option<&str>,
) -> Result<TransactionRow, sqlx::Error> {
    sqlx::query_as::<_, TransactionRow>(
        r#"
        INSERT INTO transactions (user_id, kind, amount, category, description)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, kind, amount, category, description, transaction_date
        "#,
    )
    .bind(user_id)
    .bind(kind)
    .bind(amount)
    .bind(category)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// List a user's transactions, newest first.
pub async fn list_transactions(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<TransactionRow>, sqlx::Error> {
    sqlx::query_as::<_, TransactionRow>(
        r#"
        SELECT id, user_id, kind, amount, category, description, transaction_date
        FROM transactions
        WHERE user_id = $1
        ORDER BY transaction_date DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
