//! User repository for MailAssist.
//!
//! This module provides the credential store operations on the users table.

use sqlx::SqlitePool;

use super::user::{NewUser, User};
use crate::datetime::now_db_timestamp;
use crate::{MailAssistError, Result};

/// Repository for user operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// Returns [`MailAssistError::Conflict`] if the email is already registered.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let result = sqlx::query("INSERT INTO users (email, password, created_at) VALUES (?, ?, ?)")
            .bind(&new_user.email)
            .bind(&new_user.password)
            .bind(now_db_timestamp())
            .execute(self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    MailAssistError::Conflict("User already exists".to_string())
                }
                other => MailAssistError::from(other),
            })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| MailAssistError::Storage(format!("user {id} vanished after insert")))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by email (case-insensitive).
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at FROM users WHERE email = ? COLLATE NOCASE",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Check if an email is already registered (case-insensitive).
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ? COLLATE NOCASE)",
        )
        .bind(email)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    #[tokio::test]
    async fn test_create_user() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("alice@example.com", "hash"))
            .await
            .unwrap();

        assert!(user.id > 0);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password, "hash");
    }

    #[tokio::test]
    async fn test_get_by_email_case_insensitive() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());
        repo.create(&NewUser::new("Alice@Example.com", "hash"))
            .await
            .unwrap();

        let found = repo.get_by_email("alice@example.com").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "Alice@Example.com");

        assert!(repo.get_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());
        repo.create(&NewUser::new("dup@example.com", "hash"))
            .await
            .unwrap();

        let result = repo.create(&NewUser::new("DUP@example.com", "hash2")).await;
        assert!(matches!(result, Err(MailAssistError::Conflict(_))));
        let stored = repo.get_by_email("dup@example.com").await.unwrap().unwrap();
        assert_eq!(stored.password, "hash");
    }

    #[tokio::test]
    async fn test_email_exists() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        assert!(!repo.email_exists("x@example.com").await.unwrap());
        repo.create(&NewUser::new("x@example.com", "hash"))
            .await
            .unwrap();
        assert!(repo.email_exists("X@EXAMPLE.COM").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());
        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }
}
