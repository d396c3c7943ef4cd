//! Configuration module for MailAssist.

use serde::Deserialize;
use std::path::Path;

use crate::{MailAssistError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Whether to serve the compiled single-page UI.
    #[serde(default)]
    pub serve_static: bool,
    /// Path to the compiled UI assets.
    #[serde(default = "default_static_path")]
    pub static_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_path() -> String {
    "web/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            serve_static: false,
            static_path: default_static_path(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL.
    #[serde(default = "default_db_url")]
    pub url: String,
}

fn default_db_url() -> String {
    "sqlite://data/mailassist.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
        }
    }
}

/// Token signing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JWT secret key (must be set).
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime in days.
    #[serde(default = "default_token_expiry_days")]
    pub token_expiry_days: u64,
}

fn default_token_expiry_days() -> u64 {
    7
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_expiry_days: default_token_expiry_days(),
        }
    }
}

/// Gemini provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key (must be set).
    #[serde(default)]
    pub api_key: String,
    /// Model name.
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// Base URL of the Generative Language API.
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_gemini_timeout")]
    pub timeout_secs: u64,
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_timeout() -> u64 {
    60
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_gemini_timeout(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional path to a log file. Console only when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Auth configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Gemini configuration.
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(MailAssistError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| MailAssistError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `MAILASSIST_JWT_SECRET` or `JWT_SECRET`: token signing secret
    /// - `GOOGLE_API_KEY`: Gemini API key
    /// - `DATABASE_URL`: SQLite connection URL
    /// - `PORT`: HTTP port
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(secret) = non_empty("MAILASSIST_JWT_SECRET").or_else(|| non_empty("JWT_SECRET")) {
            self.auth.jwt_secret = secret;
        }
        if let Some(key) = non_empty("GOOGLE_API_KEY") {
            self.gemini.api_key = key;
        }
        if let Some(url) = non_empty("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(port) = non_empty("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the JWT secret or the Gemini API key is not set.
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(MailAssistError::Config(
                "jwt_secret is not set. \
                 Set it in config.toml or via MAILASSIST_JWT_SECRET environment variable."
                    .to_string(),
            ));
        }
        if self.gemini.api_key.is_empty() {
            return Err(MailAssistError::Config(
                "gemini api_key is not set. \
                 Set it in config.toml or via GOOGLE_API_KEY environment variable."
                    .to_string(),
            ));
        }
        Ok(())
    }
}
