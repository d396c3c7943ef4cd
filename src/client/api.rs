//! Typed HTTP client for the MailAssist API.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::web::dto::{
    GenerateRequest, GenerateResponse, HistoryItem, HistoryResponse, LoginRequest, MeResponse,
    SignupRequest, TokenResponse, ToneResponse, TonesResponse,
};
use crate::{MailAssistError, Result};

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
    #[serde(default)]
    code: Option<String>,
}

/// Client for the MailAssist REST API.
///
/// Stateless apart from the base URL; the bearer token is passed per call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API at `base_url`, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| MailAssistError::Config(format!("invalid API url '{base_url}': {e}")))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Register and return a token.
    pub async fn signup(&self, email: &str, password: &str) -> Result<String> {
        let body = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: TokenResponse = send(self.http.post(self.url("signup")?).json(&body)).await?;
        Ok(resp.token)
    }

    /// Log in and return a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: TokenResponse = send(self.http.post(self.url("login")?).json(&body)).await?;
        Ok(resp.token)
    }

    /// Generate a reply and return its text.
    pub async fn generate(&self, token: &str, request: &GenerateRequest) -> Result<String> {
        let resp: GenerateResponse = send(
            self.http
                .post(self.url("generate")?)
                .bearer_auth(token)
                .json(request),
        )
        .await?;
        Ok(resp.response)
    }

    /// Fetch the caller's history, newest first.
    pub async fn history(&self, token: &str) -> Result<Vec<HistoryItem>> {
        let resp: HistoryResponse =
            send(self.http.get(self.url("history")?).bearer_auth(token)).await?;
        Ok(resp.emails)
    }

    /// Identity behind a token.
    pub async fn me(&self, token: &str) -> Result<MeResponse> {
        send(self.http.get(self.url("me")?).bearer_auth(token)).await
    }

    /// Tone catalogue.
    pub async fn tones(&self) -> Result<Vec<ToneResponse>> {
        let resp: TonesResponse = send(self.http.get(self.url("tones")?)).await?;
        Ok(resp.tones)
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| MailAssistError::Config(format!("invalid API path '{path}': {e}")))
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| MailAssistError::Http(e.to_string()))?;

    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| MailAssistError::Http(e.to_string()))?;

    if !status.is_success() {
        return Err(error_from_response(status, &bytes));
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| MailAssistError::Http(format!("unexpected response body: {e}")))
}

/// Map an API error response back onto the crate error kinds.
fn error_from_response(status: StatusCode, body: &[u8]) -> MailAssistError {
    let Ok(payload) = serde_json::from_slice::<ErrorPayload>(body) else {
        return MailAssistError::Http(format!("HTTP {}", status.as_u16()));
    };

    match (payload.code.as_deref(), status) {
        (Some("CONFLICT"), _) => MailAssistError::Conflict(payload.error),
        (Some("UNAUTHORIZED"), _) | (None, StatusCode::UNAUTHORIZED) => {
            MailAssistError::Auth(payload.error)
        }
        (Some("GENERATION_FAILED"), _) => MailAssistError::Generation(payload.error),
        (Some("BAD_REQUEST"), _) | (None, StatusCode::BAD_REQUEST) => {
            MailAssistError::Validation(payload.error)
        }
        (Some("INTERNAL_ERROR"), _) => MailAssistError::Storage(payload.error),
        _ => MailAssistError::Http(format!("HTTP {}: {}", status.as_u16(), payload.error)),
    }
}
