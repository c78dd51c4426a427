//! Authentication and authorization logic.
//!
//! Provides password hashing, token management, and the user queries
//! shared between the API library and the server binary.

pub mod jwt;
pub mod password;
pub mod queries;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. One variant for both, so callers
    /// cannot tell which part was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already in use")]
    DuplicateEmail,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token invalid")]
    TokenInvalid,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
