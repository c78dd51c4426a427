//! Aggregated financial reports.
//!
//! Income and expense sums bucketed by period, always scoped to one user.

use rust_decimal::Decimal;
use sqlx::PgPool;

/// Income/expense totals for one report bucket.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportRow {
    pub period: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Current-month totals for the dashboard summary.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SummaryRow {
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Month-labelled totals for the dashboard chart.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MonthlyDataRow {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Income and expense sums per `YYYY-MM` bucket of a year.
pub async fn monthly_report(
    pool: &PgPool,
    user_id: i64,
    year: i32,
) -> Result<Vec<ReportRow>, sqlx::Error> {
    sqlx::query_as::<_, ReportRow>(
        r#"
        SELECT
            to_char(transaction_date, 'YYYY-MM') AS period,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'income'), 0) AS income,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'expense'), 0) AS expenses
        FROM transactions
        WHERE user_id = $1 AND EXTRACT(YEAR FROM transaction_date)::int = $2
        GROUP BY period
        ORDER BY period ASC
        "#,
    )
    .bind(user_id)
    .bind(year)
    .fetch_all(pool)
    .await
}

/// Income and expense sums per year bucket, filtered to one year.
pub async fn yearly_report(
    pool: &PgPool,
    user_id: i64,
    year: i32,
) -> Result<Vec<ReportRow>, sqlx::Error> {
    sqlx::query_as::<_, ReportRow>(
        r#"
        SELECT
            to_char(transaction_date, 'YYYY') AS period,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'income'), 0) AS income,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'expense'), 0) AS expenses
        FROM transactions
        WHERE user_id = $1 AND EXTRACT(YEAR FROM transaction_date)::int = $2
        GROUP BY period
        ORDER BY period ASC
        "#,
    )
    .bind(user_id)
    .bind(year)
    .fetch_all(pool)
    .await
}

/// Income and expense totals for the current calendar month.
pub async fn current_month_summary(
    pool: &PgPool,
    user_id: i64,
) -> Result<SummaryRow, sqlx::Error> {
    sqlx::query_as::<_, SummaryRow>(
        r#"
        SELECT
            COALESCE(SUM(amount) FILTER (WHERE kind = 'income'), 0) AS income,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'expense'), 0) AS expenses
        FROM transactions
        WHERE user_id = $1
          AND date_trunc('month', transaction_date) = date_trunc('month', now())
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// First six month buckets with abbreviated month labels, for charts.
pub async fn monthly_data(pool: &PgPool, user_id: i64) -> Result<Vec<MonthlyDataRow>, sqlx::Error> {
    sqlx::query_as::<_, MonthlyDataRow>(
        r#"
        SELECT
            to_char(date_trunc('month', transaction_date), 'Mon') AS month,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'income'), 0) AS income,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'expense'), 0) AS expenses
        FROM transactions
        WHERE user_id = $1
        GROUP BY date_trunc('month', transaction_date)
        ORDER BY date_trunc('month', transaction_date) ASC
        LIMIT 6
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
