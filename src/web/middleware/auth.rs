//! Bearer token authentication middleware.

use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{Identity, TokenService};
use crate::web::error::ApiError;

/// Extractor for authenticated users.
///
/// Use this extractor to require authentication for a handler. Requests
/// without a valid `Authorization: Bearer <token>` header are rejected with
/// 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| ApiError::unauthorized("No token provided"))?;

        // Set by the jwt_auth middleware
        let tokens = parts
            .extensions
            .get::<Arc<TokenService>>()
            .ok_or_else(|| ApiError::internal("Token service not configured"))?;

        let claims = tokens
            .verify(token)
            .map_err(|_| ApiError::unauthorized("Invalid token"))?;

        Ok(AuthUser(claims.identity()))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware function to inject the token service into request extensions.
pub async fn jwt_auth(
    tokens: Arc<TokenService>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(tokens);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn parts_with(header: Option<&str>, tokens: Option<Arc<TokenService>>) -> Parts {
        let mut builder = Request::builder().uri("/history");
        if let Some(h) = header {
            builder = builder.header(AUTHORIZATION, h);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        if let Some(t) = tokens {
            parts.extensions.insert(t);
        }
        parts
    }

    fn identity() -> Identity {
        Identity {
            user_id: 3,
            email: "u@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_bearer_token() {
        let tokens = Arc::new(TokenService::new("secret", 7));
        let token = tokens.issue(&identity()).unwrap();
        let mut parts = parts_with(Some(&format!("Bearer {token}")), Some(tokens));

        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user, identity());
    }

    #[tokio::test]
    async fn test_missing_header() {
        let tokens = Arc::new(TokenService::new("secret", 7));
        let mut parts = parts_with(None, Some(tokens));

        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_scheme() {
        let tokens = Arc::new(TokenService::new("secret", 7));
        let token = tokens.issue(&identity()).unwrap();
        let mut parts = parts_with(Some(&format!("Basic {token}")), Some(tokens));

        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let token = TokenService::new("other", 7).issue(&identity()).unwrap();
        let tokens = Arc::new(TokenService::new("secret", 7));
        let mut parts = parts_with(Some(&format!("Bearer {token}")), Some(tokens));

        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_missing_token_service() {
        let mut parts = parts_with(Some("Bearer abc"), None);

        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
