//! Reply generation module for MailAssist.
//!
//! Builds prompts from an incoming email and a tone, sends them to a
//! [`CompletionProvider`], and keeps every generated reply as per-user history.

mod gemini;
mod prompt;
mod provider;
mod repository;
mod service;
mod types;

pub use gemini::GeminiProvider;
pub use prompt::build_prompt;
pub use provider::CompletionProvider;
pub use repository::ReplyRepository;
pub use service::ReplyService;
pub use types::{find_tone, GeneratedEmail, NewGeneratedEmail, Tone, DEFAULT_TONE, TONES};
