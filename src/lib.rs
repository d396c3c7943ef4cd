//! MailAssist - AI email reply generator
//!
//! A web service that turns a pasted email and a chosen tone into a reply
//! drafted by a hosted language model, and keeps each user's replies as
//! browsable history.

pub mod auth;
pub mod client;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod reply;
pub mod web;

pub use auth::{hash_password, verify_password, AuthService, Identity, TokenService};
pub use client::{ApiClient, ViewState};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{MailAssistError, Result};
pub use reply::{CompletionProvider, GeminiProvider, GeneratedEmail, ReplyRepository, ReplyService};
pub use web::{create_router, AppState, WebServer};
