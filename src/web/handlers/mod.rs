//! API handlers.

pub mod auth;
pub mod reply;
pub mod tones;

pub use auth::*;
pub use reply::*;
pub use tones::*;

use std::sync::Arc;

use crate::auth::{AuthService, TokenService};
use crate::reply::{CompletionProvider, ReplyService};
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Signup, login and token verification.
    pub auth: AuthService,
    /// Reply generation and history.
    pub replies: ReplyService,
    /// Token service, also injected into request extensions for [`crate::web::middleware::AuthUser`].
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Wire the services together over one database and provider.
    pub fn new(
        db: Database,
        tokens: Arc<TokenService>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            auth: AuthService::new(db.clone(), tokens.clone()),
            replies: ReplyService::new(db, provider),
            tokens,
        }
    }
}
