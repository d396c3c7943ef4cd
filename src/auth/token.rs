//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs carrying the user id and email.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{MailAssistError, Result};

/// Seconds in one day.
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// The verified identity carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID.
    pub user_id: i64,
    /// User email.
    pub email: String,
}

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// User email.
    pub email: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

impl TokenClaims {
    /// Identity embedded in these claims.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.sub,
            email: self.email.clone(),
        }
    }
}

/// Issues and verifies signed tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: u64,
}

impl TokenService {
    /// Create a token service from a shared secret and a lifetime in days.
    pub fn new(secret: &str, expiry_days: u64) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_secs: expiry_days * SECS_PER_DAY,
        }
    }

    /// Issue a signed token for the given identity.
    pub fn issue(&self, identity: &Identity) -> Result<String> {
        let now = Utc::now().timestamp() as u64;
        let claims = TokenClaims {
            sub: identity.user_id,
            email: identity.email.clone(),
            iat: now,
            exp: now + self.expiry_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            MailAssistError::Auth("Failed to generate token".to_string())
        })
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        if token.is_empty() {
            return Err(MailAssistError::Auth("No token provided".to_string()));
        }

        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("JWT validation failed: {}", e);
                MailAssistError::Auth("Invalid token".to_string())
            })
    }
}
