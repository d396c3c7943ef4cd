//! User model for MailAssist.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered user.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login email (unique, case-insensitive).
    pub email: String,
    /// Password hash (Argon2 PHC string).
    pub password: String,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login email.
    pub email: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
}

impl NewUser {
    /// Create a new user record from an email and an already-hashed password.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password_hash.into(),
        }
    }
}
