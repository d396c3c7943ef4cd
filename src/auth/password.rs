//! Password hashing for MailAssist.
//!
//! Uses Argon2id for salted one-way password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use thiserror::Error;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password is empty.
    #[error("password must not be empty")]
    Empty,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashError(String),

    /// Password hash is invalid.
    #[error("invalid password hash format")]
    InvalidHash,

    /// Password verification failed (wrong password).
    #[error("password verification failed")]
    VerificationFailed,
}

/// Hash a password using Argon2id with a random salt.
///
/// Returns a PHC-formatted hash string that includes the salt and parameters.
///
/// # Examples
///
/// ```
/// use mailassist::auth::hash_password;
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// Returns `Ok(())` if the password matches, or an error if it doesn't.
///
/// # Examples
///
/// ```
/// use mailassist::auth::{hash_password, verify_password};
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(verify_password("my_secure_password", &hash).is_ok());
/// assert!(verify_password("wrong_password", &hash).is_err());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    // Parameters come from the parsed hash
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_success() {
        let hash = hash_password("test_password_123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("$v=19$"));
    }

    #[test]
    fn test_hash_password_different_salts() {
        let hash1 = hash_password("same_password").unwrap();
        let hash2 = hash_password("same_password").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_hash_password_empty() {
        assert!(matches!(hash_password(""), Err(PasswordError::Empty)));
    }

    #[test]
    fn test_short_password_is_accepted() {
        let hash = hash_password("a").unwrap();
        assert!(verify_password("a", &hash).is_ok());
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("correct_password").unwrap();
        assert!(verify_password("correct_password", &hash).is_ok());
    }

    #[test]
    fn test_verify_password_wrong() {
        let hash = hash_password("correct_password").unwrap();
        let result = verify_password("wrong_password", &hash);
        assert!(matches!(result, Err(PasswordError::VerificationFailed)));
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        let result = verify_password("any_password", "not_a_valid_hash");
        assert!(matches!(result, Err(PasswordError::InvalidHash)));
    }

    #[test]
    fn test_password_with_unicode() {
        let password = "pässwörd-密码";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).is_ok());
    }
}
