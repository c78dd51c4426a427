//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use fintrack_core::auth::AuthError;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already in use")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No token, authorization denied")]
    TokenMissing,

    #[error("Malformed authorization header")]
    TokenMalformed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::DuplicateEmail => (StatusCode::BAD_REQUEST, "duplicate_email"),
            AppError::InvalidCredentials => (StatusCode::BAD_REQUEST, "invalid_credentials"),
            AppError::TokenMissing => (StatusCode::UNAUTHORIZED, "token_missing"),
            AppError::TokenMalformed => (StatusCode::UNAUTHORIZED, "token_malformed"),
            AppError::TokenExpired => (StatusCode::FORBIDDEN, "token_expired"),
            AppError::TokenInvalid => (StatusCode::FORBIDDEN, "token_invalid"),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Internal(detail) => {
                // Full detail stays in the server log; the client sees an
                // opaque error.
                error!(%detail, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };
        let body = Json(ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::DuplicateEmail => AppError::DuplicateEmail,
            AuthError::TokenExpired => AppError::TokenExpired,
            AuthError::TokenInvalid => AppError::TokenInvalid,
            AuthError::TokenError(msg) => AppError::Internal(msg),
            AuthError::DbError(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_the_taxonomy() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::DuplicateEmail, StatusCode::BAD_REQUEST),
            (AppError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (AppError::TokenMissing, StatusCode::UNAUTHORIZED),
            (AppError::TokenMalformed, StatusCode::UNAUTHORIZED),
            (AppError::TokenExpired, StatusCode::FORBIDDEN),
            (AppError::TokenInvalid, StatusCode::FORBIDDEN),
            (AppError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (
                AppError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn internal_errors_stay_opaque() {
        let err = AppError::Internal("connection refused on 10.0.0.3".into());
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn duplicate_key_from_core_maps_to_duplicate_email() {
        let err = AppError::from(AuthError::DuplicateEmail);
        assert!(matches!(err, AppError::DuplicateEmail));
    }
}
