//! Google Gemini completion provider.
//!
//! Calls the Generative Language REST API's `generateContent` method with a
//! single user turn and returns the concatenated text of the first candidate.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::provider::CompletionProvider;
use crate::config::GeminiConfig;
use crate::{MailAssistError, Result};

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    code: u32,
    message: String,
    #[serde(default)]
    status: String,
}

/// Completion provider backed by the Gemini API.
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Build a provider from configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("mailassist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MailAssistError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&config.base_url, &config.model)?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// The `generateContent` URL this provider posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(model = %self.model, "Gemini request failed: {}", e);
                MailAssistError::Generation(request_error_message(&e))
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| MailAssistError::Generation(request_error_message(&e)))?;

        if !status.is_success() {
            let message = error_message(status.as_u16(), &text);
            warn!(model = %self.model, status = status.as_u16(), "Gemini returned an error: {}", message);
            return Err(MailAssistError::Generation(message));
        }

        extract_text(&text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

fn endpoint_url(base_url: &str, model: &str) -> Result<Url> {
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    Url::parse(&base)
        .and_then(|u| u.join(&format!("v1beta/models/{model}:generateContent")))
        .map_err(|e| MailAssistError::Config(format!("invalid gemini base_url '{base_url}': {e}")))
}

fn request_error_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Gemini request timed out".to_string()
    } else if e.is_connect() {
        "Could not connect to Gemini".to_string()
    } else {
        format!("Gemini request failed: {e}")
    }
}

/// Message for a non-2xx response, preferring the API's own error message.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<GeminiError>(body) {
        Ok(err) if !err.error.status.is_empty() => {
            format!("{} ({})", err.error.message, err.error.status)
        }
        Ok(err) if err.error.code > 0 => format!("{} ({})", err.error.message, err.error.code),
        Ok(err) => err.error.message,
        Err(_) => format!("Gemini returned HTTP {status}"),
    }
}

/// Text of the first candidate, with all text parts concatenated.
fn extract_text(body: &str) -> Result<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| MailAssistError::Generation(format!("unexpected Gemini response: {e}")))?;

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| MailAssistError::Generation("Gemini returned no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(MailAssistError::Generation(format!(
            "Gemini returned an empty reply (finish reason: {reason})"
        )));
    }

    Ok(text)
}
