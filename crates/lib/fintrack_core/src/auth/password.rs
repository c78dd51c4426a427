//! Password hashing via bcrypt.

use super::AuthError;

/// bcrypt cost factor.
const BCRYPT_COST: u32 = 12;

/// Hash a password with bcrypt (cost 12).
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| AuthError::Internal(format!("bcrypt hash: {e}")))
}

/// Verify a password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a failed comparison, so callers
/// cannot distinguish it from a wrong password.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("secret1").expect("hash");
        assert_ne!(hash, "secret1");
        assert!(verify_password("secret1", &hash));
    }

    #[test]
    fn wrong_password_fails() {
        let hash = hash_password("secret1").expect("hash");
        assert!(!verify_password("secret2", &hash));
    }

    #[test]
    fn malformed_hash_is_a_failed_comparison() {
        assert!(!verify_password("secret1", "not-a-bcrypt-hash"));
    }
}
