//! Authentication service — registration, login and profile flows.

use regex::Regex;
use sqlx::PgPool;
use tracing::info;

use fintrack_core::auth::{jwt, password, queries};

use crate::error::{AppError, AppResult};
use crate::models::{AuthUser, LoginResponse, RegisterResponse};

/// Shape check for `local@domain.tld` emails. Emails are compared exactly
/// as stored, so no normalization happens here.
fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Validate registration input: all fields present, well-formed email,
/// password of at least 6 characters.
fn validate_registration(name: &str, email: &str, password: &str) -> AppResult<()> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::Validation("All fields are required".into()));
    }
    if !valid_email(email) {
        return Err(AppError::Validation("Invalid email format".into()));
    }
    if password.len() < 6 {
        return Err(AppError::Validation(
            "Password must be at least 6 characters long".into(),
        ));
    }
    Ok(())
}

/// Register a new user account, returning the store-assigned id.
pub async fn register(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> AppResult<RegisterResponse> {
    validate_registration(name, email, password)?;

    // Fast path only; the unique constraint on users.email stays
    // authoritative under concurrent registrations.
    if queries::email_exists(pool, email).await? {
        return Err(AppError::DuplicateEmail);
    }

    // Offload the bcrypt work to a dedicated thread.
    let password_hash = {
        let password = password.to_string();
        tokio::task::spawn_blocking(move || password::hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("hash task: {e}")))??
    };
    let user_id = queries::create_user(pool, name, email, &password_hash).await?;

    info!(user_id, "user registered");
    Ok(RegisterResponse {
        message: "User registered successfully".into(),
        user_id,
    })
}

/// Authenticate with email + password, issuing a signed token.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".into(),
        ));
    }

    // Unknown email and wrong password produce the identical error, so
    // the response never reveals whether the email exists.
    let (user_id, name, password_hash) = queries::find_user_by_email(pool, email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    // Offload the bcrypt work to a dedicated thread.
    let password_ok = {
        let password = password.to_string();
        tokio::task::spawn_blocking(move || password::verify_password(&password, &password_hash))
            .await
            .map_err(|e| AppError::Internal(format!("verify task: {e}")))?
    };
    if !password_ok {
        return Err(AppError::InvalidCredentials);
    }

    let token = jwt::issue_token(user_id, email, jwt_secret)?;

    info!(user_id, "login successful");
    Ok(LoginResponse {
        message: "Login successful".into(),
        token,
        user: AuthUser {
            id: user_id,
            name,
            email: email.to_string(),
        },
    })
}

/// Fetch the profile of a previously verified identity.
pub async fn get_profile(pool: &PgPool, user_id: i64) -> AppResult<AuthUser> {
    let user = queries::get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(AuthUser {
        id: user.id,
        name: user.name,
        email: user.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_registration() {
        assert!(validate_registration("Ann", "ann@x.com", "secret1").is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        for (name, email, password) in [
            ("", "ann@x.com", "secret1"),
            ("Ann", "", "secret1"),
            ("Ann", "ann@x.com", ""),
        ] {
            assert!(matches!(
                validate_registration(name, email, password),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["ann", "ann@x", "@x.com", "ann @x.com", "ann@x .com"] {
            assert!(
                matches!(
                    validate_registration("Ann", email, "secret1"),
                    Err(AppError::Validation(_))
                ),
                "email {email:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(matches!(
            validate_registration("Ann", "ann@x.com", "short"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn email_shape_allows_subdomains_and_plus() {
        assert!(valid_email("a.b+tag@mail.example.co.uk"));
    }
}
