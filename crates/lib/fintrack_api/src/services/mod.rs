//! Business-logic services backing the handlers.

pub mod auth;
