//! Savings goal persistence.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Row returned by goal queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GoalRow {
    pub id: i64,
    pub user_id: i64,
    pub goal_name: String,
    pub target_amount: Decimal,
    pub current_savings: Decimal,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// List a user's goals, oldest first.
pub async fn list_goals(pool: &PgPool, user_id: i64) -> Result<Vec<GoalRow>, sqlx::Error> {
    sqlx::query_as::<_, GoalRow>(
        r#"
        SELECT id, user_id, goal_name, target_amount, current_savings, target_date, created_at
        FROM goals
        WHERE user_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Create a goal, returning the store-assigned id.
pub async fn add_goal(
    pool: &PgPool,
    user_id: i64,
    goal_name: &str,
    target_amount: Decimal,
    current_savings: Decimal,
    target_date: Option<NaiveDate>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO goals (user_id, goal_name, target_amount, current_savings, target_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(goal_name)
    .bind(target_amount)
    .bind(current_savings)
    .bind(target_date)
    .fetch_one(pool)
    .await
}

/// Update a goal owned by a user. Returns `false` when no such goal exists
/// for that user.
pub async fn update_goal(
    pool: &PgPool,
    user_id: i64,
    goal_id: i64,
    goal_name: &str,
    target_amount: Decimal,
    current_savings: Decimal,
    target_date: Option<NaiveDate>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE goals
        SET goal_name = $1, target_amount = $2, current_savings = $3, target_date = $4
        WHERE id = $5 AND user_id = $6
        "#,
    )
    .bind(goal_name)
    .bind(target_amount)
    .bind(current_savings)
    .bind(target_date)
    .bind(goal_id)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a goal owned by a user. Returns `false` when no such goal exists
/// for that user.
pub async fn delete_goal(pool: &PgPool, user_id: i64, goal_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
        .bind(goal_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
