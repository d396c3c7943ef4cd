//! Authentication handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::{LoginRequest, MeResponse, SignupRequest, TokenResponse, ValidatedJson};
use crate::web::error::{ApiError, ErrorBody};
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// POST /signup - Register a new user.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created", body = TokenResponse),
        (status = 400, description = "Missing fields or email already registered", body = ErrorBody)
    )
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.auth.signup(&req.email, &req.password).await?;
    Ok(Json(TokenResponse { token }))
}

/// POST /login - User login.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(TokenResponse { token }))
}

/// GET /me - Identity carried by the bearer token.
#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = MeResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn me(AuthUser(identity): AuthUser) -> Json<MeResponse> {
    Json(MeResponse::from(identity))
}
