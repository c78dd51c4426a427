//! Request handlers.

pub mod auth;
pub mod budgets;
pub mod goals;
pub mod health;
pub mod reports;
pub mod transactions;
