//! Generated reply repository.

use sqlx::SqlitePool;

use super::types::{GeneratedEmail, NewGeneratedEmail};
use crate::datetime::now_db_timestamp;
use crate::{MailAssistError, Result};

/// Repository for generated reply records.
pub struct ReplyRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReplyRepository<'a> {
    /// Create a new ReplyRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a record, stamping it with the current time.
    pub async fn create(&self, record: &NewGeneratedEmail) -> Result<GeneratedEmail> {
        let result = sqlx::query(
            "INSERT INTO generated_emails (user_id, prompt, response, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(record.user_id)
        .bind(&record.prompt)
        .bind(&record.response)
        .bind(now_db_timestamp())
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| MailAssistError::Storage(format!("record {id} vanished after insert")))
    }

    /// Get a record by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<GeneratedEmail>> {
        let record = sqlx::query_as::<_, GeneratedEmail>(
            "SELECT id, user_id, prompt, response, created_at FROM generated_emails WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// List a user's records, newest first.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<GeneratedEmail>> {
        let records = sqlx::query_as::<_, GeneratedEmail>(
            "SELECT id, user_id, prompt, response, created_at FROM generated_emails
             WHERE user_id = ?
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}
