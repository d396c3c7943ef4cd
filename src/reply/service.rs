//! Reply generation and history.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::prompt::build_prompt;
use super::provider::CompletionProvider;
use super::repository::ReplyRepository;
use super::types::{find_tone, GeneratedEmail, NewGeneratedEmail};
use crate::{Database, MailAssistError, Result};

/// Generates replies through a completion provider and records them.
#[derive(Clone)]
pub struct ReplyService {
    db: Database,
    provider: Arc<dyn CompletionProvider>,
}

impl ReplyService {
    /// Create a new reply service.
    pub fn new(db: Database, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { db, provider }
    }

    /// Generate a reply for `user_id` and store it.
    ///
    /// Nothing is stored when the provider fails; the error carries the
    /// provider's message.
    pub async fn generate(
        &self,
        user_id: i64,
        email_text: &str,
        tone: &str,
        custom_prompt: Option<&str>,
    ) -> Result<String> {
        if email_text.trim().is_empty() || tone.trim().is_empty() {
            return Err(MailAssistError::Validation(
                "Email text and tone are required".to_string(),
            ));
        }

        if find_tone(tone).is_none() {
            debug!(user_id, tone, "Tone is not in the catalogue");
        }

        let prompt = build_prompt(email_text, tone, custom_prompt);

        let response = self.provider.complete(&prompt).await.map_err(|e| {
            warn!(
                user_id,
                provider = self.provider.name(),
                "Reply generation failed: {}",
                e
            );
            match e {
                MailAssistError::Generation(_) => e,
                other => MailAssistError::Generation(other.to_string()),
            }
        })?;

        let record = ReplyRepository::new(self.db.pool())
            .create(&NewGeneratedEmail::new(user_id, prompt.as_str(), response.as_str()))
            .await?;

        info!(
            user_id,
            record_id = record.id,
            prompt_len = prompt.len(),
            "Reply generated"
        );

        Ok(response)
    }

    /// All of a user's records, newest first.
    pub async fn history(&self, user_id: i64) -> Result<Vec<GeneratedEmail>> {
        ReplyRepository::new(self.db.pool()).list_by_user(user_id).await
    }
}
