//! API server configuration.

use thiserror::Error;

/// Configuration errors. Fatal at startup; the server must not serve
/// traffic with an incomplete configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingJwtSecret,
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Token signing secret.
    pub jwt_secret: String,
}

/// Read the token signing secret from `JWT_SECRET`.
///
/// An absent or empty secret aborts startup; the server never falls back
/// to a generated or predictable signing key.
pub fn jwt_secret_from_env() -> Result<String, ConfigError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(secret),
        _ => Err(ConfigError::MissingJwtSecret),
    }
}
