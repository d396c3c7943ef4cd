//! Completion provider abstraction.

use async_trait::async_trait;

use crate::Result;

/// A hosted text-completion backend.
///
/// Implementations return the completion text, or
/// [`crate::MailAssistError::Generation`] carrying the backend's message.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a prompt and await a single completion.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Short provider name for logs.
    fn name(&self) -> &str;
}
