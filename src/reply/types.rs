//! Generated reply records and the tone catalogue.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored prompt/response pair.
#[derive(Debug, Clone, FromRow)]
pub struct GeneratedEmail {
    /// Record ID.
    pub id: i64,
    /// Owning user ID.
    pub user_id: i64,
    /// The full prompt sent to the provider.
    pub prompt: String,
    /// The provider's reply text.
    pub response: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data for a new generated reply record.
#[derive(Debug, Clone)]
pub struct NewGeneratedEmail {
    pub user_id: i64,
    pub prompt: String,
    pub response: String,
}

impl NewGeneratedEmail {
    pub fn new(user_id: i64, prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            user_id,
            prompt: prompt.into(),
            response: response.into(),
        }
    }
}

/// A tone offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    /// Value inserted into the prompt.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// Tone applied when the client does not choose one.
pub const DEFAULT_TONE: &str = "professional";

/// Tones shown in the UI, in display order.
pub const TONES: &[Tone] = &[
    Tone {
        value: "professional",
        label: "Professional",
        description: "Formal and business-appropriate",
    },
    Tone {
        value: "casual",
        label: "Casual",
        description: "Friendly and relaxed",
    },
    Tone {
        value: "apologetic",
        label: "Apologetic",
        description: "Expressing regret or understanding",
    },
    Tone {
        value: "enthusiastic",
        label: "Enthusiastic",
        description: "Positive and energetic",
    },
    Tone {
        value: "concise",
        label: "Concise",
        description: "Brief and to the point",
    },
    Tone {
        value: "diplomatic",
        label: "Diplomatic",
        description: "Tactful and considerate",
    },
];

/// Look up a catalogued tone by value.
pub fn find_tone(value: &str) -> Option<&'static Tone> {
    TONES.iter().find(|t| t.value == value)
}
