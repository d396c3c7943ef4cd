//! View state of the reply generator UI.
//!
//! Holds everything the page shows and implements the page's actions on top
//! of [`ApiClient`]. The bearer token is the only thing meant to outlive a
//! session; persisting it is left to the caller.

use tracing::debug;

use super::api::ApiClient;
use crate::reply::DEFAULT_TONE;
use crate::web::dto::{GenerateRequest, HistoryItem};
use crate::{MailAssistError, Result};

/// State of the reply generator page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Email pasted by the user.
    pub input: String,
    /// Selected tone value.
    pub tone: String,
    /// Extra instructions for the prompt.
    pub custom_prompt: String,
    /// Last generated (or selected) reply.
    pub generated: String,
    /// Reply text as edited by the user.
    pub editable: String,
    pub edit_mode: bool,
    pub dark_mode: bool,
    /// Bearer token; `None` means logged out.
    pub token: Option<String>,
    /// History, newest first.
    pub history: Vec<HistoryItem>,
    /// History item currently shown.
    pub selected_id: Option<i64>,
    pub sidebar_open: bool,
    /// Message of the last failed action.
    pub last_error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            input: String::new(),
            tone: DEFAULT_TONE.to_string(),
            custom_prompt: String::new(),
            generated: String::new(),
            editable: String::new(),
            edit_mode: false,
            dark_mode: false,
            token: None,
            history: Vec::new(),
            selected_id: None,
            sidebar_open: false,
            last_error: None,
        }
    }
}

impl ViewState {
    /// Fresh, logged-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// State restored with a previously stored token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Whether a token is held.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Initial load: fetch history when a token is held.
    pub async fn mount(&mut self, api: &ApiClient) -> Result<()> {
        if self.token.is_some() {
            self.refresh_history(api).await?;
        }
        Ok(())
    }

    /// Create an account and keep its token.
    pub async fn signup(&mut self, api: &ApiClient, email: &str, password: &str) -> Result<()> {
        let result = api.signup(email, password).await;
        self.authenticated(api, result).await
    }

    /// Log in and keep the token.
    pub async fn login(&mut self, api: &ApiClient, email: &str, password: &str) -> Result<()> {
        let result = api.login(email, password).await;
        self.authenticated(api, result).await
    }

    async fn authenticated(&mut self, api: &ApiClient, result: Result<String>) -> Result<()> {
        let token = self.record(result)?;
        self.token = Some(token);
        self.last_error = None;
        self.refresh_history(api).await
    }

    /// Drop the token along with everything fetched with it.
    pub fn logout(&mut self) {
        self.token = None;
        self.history.clear();
        self.selected_id = None;
    }

    /// Reload history from the API.
    pub async fn refresh_history(&mut self, api: &ApiClient) -> Result<()> {
        let token = self.require_token()?;
        let result = api.history(&token).await;
        self.history = self.record(result)?;
        debug!(count = self.history.len(), "History refreshed");
        Ok(())
    }

    /// Generate a reply for the current input, then refresh history.
    ///
    /// Blank input is rejected without calling the API.
    pub async fn generate(&mut self, api: &ApiClient) -> Result<()> {
        if self.input.trim().is_empty() {
            let err = MailAssistError::Validation("Please paste an email to respond to".into());
            return self.record(Err(err));
        }
        let token = self.require_token()?;

        let request = GenerateRequest {
            email_text: self.input.clone(),
            tone: self.tone.clone(),
            custom_prompt: Some(self.custom_prompt.clone()),
        };

        let result = api.generate(&token, &request).await;
        let response = self.record(result)?;

        self.generated = response.clone();
        self.editable = response;
        self.edit_mode = false;
        self.last_error = None;

        self.refresh_history(api).await
    }

    /// Show a stored reply without generating anything.
    ///
    /// Returns `false` when no history item has that id.
    pub fn select_history(&mut self, id: i64) -> bool {
        let Some(item) = self.history.iter().find(|item| item.id == id) else {
            return false;
        };

        self.generated = item.response.clone();
        self.editable = item.response.clone();
        self.selected_id = Some(id);
        self.input.clear();
        self.custom_prompt.clear();
        self.tone = DEFAULT_TONE.to_string();
        self.edit_mode = false;
        self.sidebar_open = false;
        true
    }

    /// Reset the form.
    pub fn clear(&mut self) {
        self.input.clear();
        self.generated.clear();
        self.tone = DEFAULT_TONE.to_string();
        self.custom_prompt.clear();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    fn require_token(&mut self) -> Result<String> {
        match &self.token {
            Some(token) => Ok(token.clone()),
            None => self.record(Err(MailAssistError::Auth("Not logged in".to_string()))),
        }
    }

    /// Keep the message of a failed action for display.
    fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.last_error = Some(display_message(e));
        }
        result
    }
}

fn display_message(err: &MailAssistError) -> String {
    match err {
        MailAssistError::Validation(m)
        | MailAssistError::Conflict(m)
        | MailAssistError::Auth(m)
        | MailAssistError::Generation(m)
        | MailAssistError::Storage(m)
        | MailAssistError::Config(m) => m.clone(),
        MailAssistError::Http(_) => "Network error".to_string(),
        MailAssistError::Io(e) => e.to_string(),
    }
}
