//! # fintrack_core
//!
//! Core domain logic for Fintrack.

pub mod auth;
pub mod budgets;
pub mod goals;
pub mod migrate;
pub mod models;
pub mod reports;
pub mod transactions;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
