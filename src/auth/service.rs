//! Signup, login and token verification.

use std::sync::Arc;

use tracing::{info, warn};

use super::password::{hash_password, verify_password, PasswordError};
use super::token::{Identity, TokenService};
use crate::db::{NewUser, UserRepository};
use crate::{Database, MailAssistError, Result};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Authentication service.
///
/// Owns credential checks against the user store and issues tokens through
/// the shared [`TokenService`].
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(db: Database, tokens: Arc<TokenService>) -> Self {
        Self { db, tokens }
    }

    /// Register a new user and return a signed token for it.
    ///
    /// # Errors
    ///
    /// - [`MailAssistError::Validation`] if email or password is empty.
    /// - [`MailAssistError::Conflict`] if the email is already registered.
    pub async fn signup(&self, email: &str, password: &str) -> Result<String> {
        let email = email.trim();
        require_credentials(email, password)?;

        let repo = UserRepository::new(self.db.pool());
        if repo.email_exists(email).await? {
            return Err(MailAssistError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(password).map_err(|e| match e {
            PasswordError::Empty => {
                MailAssistError::Validation("Email and password are required".to_string())
            }
            other => MailAssistError::Storage(other.to_string()),
        })?;

        // The unique index still catches a concurrent signup with the same email
        let user = repo.create(&NewUser::new(email, password_hash)).await?;
        info!(user_id = user.id, "User signed up");

        self.tokens.issue(&Identity {
            user_id: user.id,
            email: user.email,
        })
    }

    /// Check credentials and return a signed token.
    ///
    /// Unknown email and wrong password fail with the same message.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let email = email.trim();
        require_credentials(email, password)?;

        let repo = UserRepository::new(self.db.pool());
        let user = match repo.get_by_email(email).await? {
            Some(user) => user,
            None => {
                info!("Login failed: unknown email");
                return Err(MailAssistError::Auth(INVALID_CREDENTIALS.to_string()));
            }
        };

        match verify_password(password, &user.password) {
            Ok(()) => {}
            Err(PasswordError::VerificationFailed) => {
                info!(user_id = user.id, "Login failed: wrong password");
                return Err(MailAssistError::Auth(INVALID_CREDENTIALS.to_string()));
            }
            Err(e) => {
                warn!(user_id = user.id, "Stored password hash is unusable: {}", e);
                return Err(MailAssistError::Auth(INVALID_CREDENTIALS.to_string()));
            }
        }

        info!(user_id = user.id, "User logged in");
        self.tokens.issue(&Identity {
            user_id: user.id,
            email: user.email,
        })
    }

    /// Verify a bearer token and return the identity it carries.
    pub fn verify(&self, token: &str) -> Result<Identity> {
        self.tokens.verify(token).map(|claims| claims.identity())
    }
}

fn require_credentials(email: &str, password: &str) -> Result<()> {
    if email.is_empty() || password.is_empty() {
        return Err(MailAssistError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    Ok(())
}
