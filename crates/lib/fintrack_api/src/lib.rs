//! # fintrack_api
//!
//! HTTP API library for Fintrack.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post, put};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{auth, budgets, goals, health, reports, transactions};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `fintrack_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    fintrack_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/auth/register", post(auth::register_handler))
        .route("/api/auth/login", post(auth::login_handler));

    // Protected routes (require a verified bearer token)
    let protected = Router::new()
        .route("/api/auth/dashboard", get(auth::dashboard_handler))
        .route(
            "/api/transactions",
            get(transactions::list_transactions_handler)
                .post(transactions::add_transaction_handler),
        )
        .route(
            "/api/budgets",
            get(budgets::list_budgets_handler).post(budgets::add_budget_handler),
        )
        .route(
            "/api/goals/{user_id}",
            get(goals::list_goals_handler).post(goals::add_goal_handler),
        )
        .route(
            "/api/goals/{user_id}/{goal_id}",
            put(goals::update_goal_handler).delete(goals::delete_goal_handler),
        )
        .route(
            "/api/reports/{report_type}/{user_id}",
            get(reports::report_handler),
        )
        .route(
            "/api/financial-summary/{user_id}",
            get(reports::financial_summary_handler),
        )
        .route(
            "/api/monthly-data/{user_id}",
            get(reports::monthly_data_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
