//! Error types for MailAssist.

use thiserror::Error;

/// Common error type for MailAssist.
#[derive(Error, Debug)]
pub enum MailAssistError {
    /// A required field is missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// The resource already exists (e.g. duplicate email on signup).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad credentials or an invalid/expired token.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The external AI provider failed.
    ///
    /// Carries the provider's own message.
    #[error("generation error: {0}")]
    Generation(String),

    /// Persistence failure.
    ///
    /// Errors from sqlx are converted automatically.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure talking to the API.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl MailAssistError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            MailAssistError::Validation(_) => "validation",
            MailAssistError::Conflict(_) => "conflict",
            MailAssistError::Auth(_) => "auth",
            MailAssistError::Generation(_) => "generation",
            MailAssistError::Storage(_) => "storage",
            MailAssistError::Io(_) => "io",
            MailAssistError::Config(_) => "config",
            MailAssistError::Http(_) => "http",
        }
    }
}

// Conversion from sqlx errors
impl From<sqlx::Error> for MailAssistError {
    fn from(e: sqlx::Error) -> Self {
        MailAssistError::Storage(e.to_string())
    }
}

/// Result type alias for MailAssist operations.
pub type Result<T> = std::result::Result<T, MailAssistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = MailAssistError::Auth("invalid credentials".to_string());
        assert_eq!(err.to_string(), "authentication error: invalid credentials");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = MailAssistError::Conflict("user already exists".to_string());
        assert_eq!(err.to_string(), "conflict: user already exists");
    }

    #[test]
    fn test_generation_error_display() {
        let err = MailAssistError::Generation("quota exceeded".to_string());
        assert_eq!(err.to_string(), "generation error: quota exceeded");
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: MailAssistError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, MailAssistError::Storage(_)));
        assert_eq!(err.kind(), "storage");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MailAssistError = io_err.into();
        assert!(matches!(err, MailAssistError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(MailAssistError::Validation(String::new()).kind(), "validation");
        assert_eq!(MailAssistError::Conflict(String::new()).kind(), "conflict");
        assert_eq!(MailAssistError::Auth(String::new()).kind(), "auth");
        assert_eq!(MailAssistError::Generation(String::new()).kind(), "generation");
    }
}
