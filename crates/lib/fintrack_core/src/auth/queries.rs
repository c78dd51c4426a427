//! Auth-related database queries.

use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::User;

/// Fetch a user by email, returning (id, name, password_hash).
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<(i64, String, String)>, AuthError> {
    let row = sqlx::query_as::<_, (i64, String, String)>(
        "SELECT id, name, password_hash FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Create a new user, returning the store-assigned id.
///
/// The unique constraint on `users.email` is the authoritative guard
/// against concurrent registrations; its violation surfaces as
/// `DuplicateEmail`, the same error the pre-check produces.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<i64, AuthError> {
    let result = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await;

    match result {
        Ok(id) => Ok(id),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AuthError::DuplicateEmail),
        Err(e) => Err(e.into()),
    }
}

/// Fetch a user summary by id.
pub async fn get_user_by_id(pool: &PgPool, user_id: i64) -> Result<Option<User>, AuthError> {
    let row =
        sqlx::query_as::<_, (i64, String, String)>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|(id, name, email)| User { id, name, email }))
}
