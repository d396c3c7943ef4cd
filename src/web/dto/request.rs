//! Request DTOs for the web API.
//!
//! Missing fields deserialize as empty so they are reported by validation
//! with the same message as empty ones.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::not_empty_trimmed;

/// Signup request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Login email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    /// Plain-text password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Login email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    /// Plain-text password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Reply generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// The email to reply to.
    #[serde(default)]
    #[validate(custom(function = "not_empty_trimmed", message = "Email text and tone are required"))]
    pub email_text: String,
    /// Tone of the reply, e.g. `professional`.
    #[serde(default)]
    #[validate(custom(function = "not_empty_trimmed", message = "Email text and tone are required"))]
    pub tone: String,
    /// Extra instructions appended to the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}
