//! Validation utilities for web API DTOs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// Malformed JSON and failed validation are both rejected with 400.
///
/// # Example
///
/// ```ignore
/// use mailassist::web::dto::ValidatedJson;
///
/// async fn generate(
///     ValidatedJson(payload): ValidatedJson<GenerateRequest>,
/// ) -> Result<Json<GenerateResponse>, ApiError> {
///     // payload is already validated
///     // ...
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

/// Validate that a string is not empty after trimming whitespace.
pub fn not_empty_trimmed(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("not_empty_trimmed")
            .with_message("Must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::error::ErrorCode;
    use crate::web::dto::GenerateRequest;
    use axum::body::Body;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_not_empty_trimmed_valid() {
        assert!(not_empty_trimmed("Hello").is_ok());
        assert!(not_empty_trimmed("  Hello  ").is_ok());
    }

    #[test]
    fn test_not_empty_trimmed_invalid() {
        assert!(not_empty_trimmed("").is_err());
        assert!(not_empty_trimmed("   ").is_err());
        assert!(not_empty_trimmed("\t\n").is_err());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = ValidatedJson::<GenerateRequest>::from_request(json_request("{not json"), &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }

    #[tokio::test]
    async fn test_invalid_body_is_bad_request() {
        let err = ValidatedJson::<GenerateRequest>::from_request(
            json_request(r#"{"emailText": "", "tone": "casual"}"#),
            &(),
        )
        .await
        .err()
        .unwrap();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.message(), "Email text and tone are required");
    }

    #[tokio::test]
    async fn test_valid_body() {
        let ValidatedJson(req) = ValidatedJson::<GenerateRequest>::from_request(
            json_request(r#"{"emailText": "Hi", "tone": "casual"}"#),
            &(),
        )
        .await
        .ok()
        .unwrap();
        assert_eq!(req.email_text, "Hi");
    }
}
