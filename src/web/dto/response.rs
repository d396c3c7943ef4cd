//! Response DTOs for the web API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Identity;
use crate::datetime::to_db_timestamp;
use crate::reply::{GeneratedEmail, Tone};

/// Signup/login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub token: String,
}

/// Reply generation response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Generated reply text.
    pub response: String,
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: i64,
    /// Prompt sent to the provider.
    pub prompt: String,
    /// Generated reply text.
    pub response: String,
    /// Creation time (RFC 3339, UTC).
    pub created_at: String,
}

impl From<GeneratedEmail> for HistoryItem {
    fn from(record: GeneratedEmail) -> Self {
        Self {
            id: record.id,
            prompt: record.prompt,
            response: record.response,
            created_at: to_db_timestamp(&record.created_at),
        }
    }
}

/// History response, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub emails: Vec<HistoryItem>,
}

/// Current user response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: i64,
    pub email: String,
}

impl From<Identity> for MeResponse {
    fn from(identity: Identity) -> Self {
        Self {
            user_id: identity.user_id,
            email: identity.email,
        }
    }
}

/// A selectable tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ToneResponse {
    pub value: String,
    pub label: String,
    pub description: String,
}

impl From<&Tone> for ToneResponse {
    fn from(tone: &Tone) -> Self {
        Self {
            value: tone.value.to_string(),
            label: tone.label.to_string(),
            description: tone.description.to_string(),
        }
    }
}

/// Tone catalogue response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TonesResponse {
    pub tones: Vec<ToneResponse>,
}
