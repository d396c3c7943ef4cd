//! Test helpers for API integration tests.
//!
//! Provides stub completion providers and a TestServer wired to an
//! in-memory database.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use serde_json::{json, Value};

use mailassist::auth::TokenService;
use mailassist::config::ServerConfig;
use mailassist::reply::CompletionProvider;
use mailassist::web::{create_router, AppState};
use mailassist::{Database, MailAssistError};

/// JWT secret used by test servers.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// Provider that answers every prompt and records what it was sent.
#[derive(Default)]
pub struct StubProvider {
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of completions requested.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, prompt: &str) -> mailassist::Result<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(format!("Generated reply #{n}"))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Provider that always fails with the given message.
pub struct FailingProvider(pub &'static str);

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn complete(&self, _prompt: &str) -> mailassist::Result<String> {
        Err(MailAssistError::Generation(self.0.to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Build the app state over a fresh in-memory database.
pub async fn create_test_state(provider: Arc<dyn CompletionProvider>) -> AppState {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    AppState::new(db, Arc::new(TokenService::new(TEST_SECRET, 7)), provider)
}

/// Create a test server with an in-memory database.
pub async fn create_test_server(provider: Arc<dyn CompletionProvider>) -> TestServer {
    let state = create_test_state(provider).await;
    let router = create_router(Arc::new(state), &ServerConfig::default());
    TestServer::new(router).expect("Failed to create test server")
}

/// Sign up a user and return the token.
pub async fn signup(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/signup")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("signup response has no token")
        .to_string()
}

/// Generate a reply as the token's owner and return the response body.
pub async fn generate(server: &TestServer, token: &str, email_text: &str, tone: &str) -> Value {
    let response = server
        .post("/generate")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .json(&json!({ "emailText": email_text, "tone": tone, "customPrompt": "" }))
        .await;
    response.assert_status_ok();
    response.json()
}
