//! Authentication middleware — Bearer token extraction and verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use fintrack_core::auth::AuthError;
use fintrack_core::auth::jwt::verify_token;
use fintrack_core::models::auth::TokenClaims;

use crate::AppState;
use crate::error::AppError;

/// Verified identity attached to request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies it,
/// and injects `AuthenticatedUser` into request extensions.
///
/// Requests without a usable header are rejected before any signature
/// work. Downstream handlers read the injected identity and never
/// re-verify.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::TokenMissing)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::TokenMalformed)?;

    let claims = verify_token(token, state.config.jwt_secret.as_bytes()).map_err(|e| match e {
        AuthError::TokenExpired => AppError::TokenExpired,
        _ => AppError::TokenInvalid,
    })?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

/// Reject requests whose path user id differs from the verified identity.
///
/// Kept for the path-scoped routes of the original client contract
/// (goals, reports); newer routes take the user from the token alone.
pub fn ensure_owner(user: &AuthenticatedUser, user_id: i64) -> Result<(), AppError> {
    if user.0.sub != user_id {
        return Err(AppError::Forbidden("Not allowed for this user".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: i64) -> AuthenticatedUser {
        AuthenticatedUser(TokenClaims {
            sub,
            email: "ann@x.com".into(),
            exp: 0,
            iat: 0,
        })
    }

    #[test]
    fn owner_passes() {
        assert!(ensure_owner(&claims(7), 7).is_ok());
    }

    #[test]
    fn foreign_user_is_forbidden() {
        assert!(matches!(
            ensure_owner(&claims(7), 8),
            Err(AppError::Forbidden(_))
        ));
    }
}
