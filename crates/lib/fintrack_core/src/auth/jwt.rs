//! Token issue and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Token lifetime: 24 hours.
const TOKEN_EXPIRY_SECS: i64 = 24 * 60 * 60;

/// Issue a signed access token (HS256, 24 h expiry) bound to a user.
pub fn issue_token(user_id: i64, email: &str, secret: &[u8]) -> Result<String, AuthError> {
    issue_token_with_expiry(user_id, email, secret, TOKEN_EXPIRY_SECS)
}

fn issue_token_with_expiry(
    user_id: i64,
    email: &str,
    secret: &[u8],
    expiry_secs: i64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id,
        email: email.to_string(),
        exp: (now + Duration::seconds(expiry_secs)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify an access token, returning the claims on success.
///
/// Expiry is reported separately from signature or shape failures.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    match decode::<TokenClaims>(token, &key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => Err(AuthError::TokenExpired),
            _ => Err(AuthError::TokenInvalid),
        },
    }
}
