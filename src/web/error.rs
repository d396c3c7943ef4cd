//! API error handling for the MailAssist web API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::MailAssistError;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad request (400).
    BadRequest,
    /// Email already registered (400).
    Conflict,
    /// Unauthorized (401).
    Unauthorized,
    /// Not found (404).
    NotFound,
    /// The AI provider failed (500).
    GenerationFailed,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Conflict => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::GenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Error code.
    pub code: ErrorCode,
    /// Field-level validation error details (only present for validation errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Vec<String>>>,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    details: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Create a generation failure error.
    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationFailed, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Create a validation error from validator::ValidationErrors.
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let mut details: HashMap<String, Vec<String>> = HashMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
                .collect();
            details.insert(field.to_string(), messages);
        }

        let message = details
            .values()
            .flatten()
            .next()
            .cloned()
            .unwrap_or_else(|| "Validation failed".to_string());

        Self {
            code: ErrorCode::BadRequest,
            message,
            details: Some(details),
        }
    }

    /// The error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: self.message,
            code: self.code,
            details: self.details,
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<MailAssistError> for ApiError {
    fn from(err: MailAssistError) -> Self {
        match err {
            MailAssistError::Validation(msg) => ApiError::bad_request(msg),
            MailAssistError::Conflict(msg) => ApiError::conflict(msg),
            MailAssistError::Auth(msg) => ApiError::unauthorized(msg),
            MailAssistError::Generation(msg) => ApiError::generation_failed(msg),
            other => {
                tracing::error!(kind = other.kind(), "Internal error: {}", other);
                ApiError::internal("An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_error_code_status() {
        assert_eq!(ErrorCode::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::Conflict.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::GenerationFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_domain_error() {
        let cases = [
            (MailAssistError::Validation("v".into()), ErrorCode::BadRequest),
            (MailAssistError::Conflict("c".into()), ErrorCode::Conflict),
            (MailAssistError::Auth("a".into()), ErrorCode::Unauthorized),
            (MailAssistError::Generation("g".into()), ErrorCode::GenerationFailed),
            (MailAssistError::Storage("s".into()), ErrorCode::InternalError),
            (MailAssistError::Config("c".into()), ErrorCode::InternalError),
        ];

        for (err, code) in cases {
            assert_eq!(ApiError::from(err).code(), code);
        }
    }

    #[test]
    fn test_storage_details_hidden() {
        let err = ApiError::from(MailAssistError::Storage("disk I/O error at page 7".into()));
        assert_eq!(err.message(), "An internal error occurred");
    }

    #[test]
    fn test_generation_message_kept() {
        let err = ApiError::from(MailAssistError::Generation("Quota exceeded".into()));
        assert_eq!(err.message(), "Quota exceeded");
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let (status, json) = body_json(ApiError::conflict("User already exists")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({"error": "User already exists", "code": "CONFLICT"})
        );

        let (status, json) = body_json(ApiError::generation_failed("boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "GENERATION_FAILED");
    }
}
