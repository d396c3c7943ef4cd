//! Reply generation and history handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::{
    GenerateRequest, GenerateResponse, HistoryItem, HistoryResponse, ValidatedJson,
};
use crate::web::error::{ApiError, ErrorBody};
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// POST /generate - Generate a reply to an email.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "reply",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated reply", body = GenerateResponse),
        (status = 400, description = "Missing email text or tone", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 500, description = "AI provider failed", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn generate(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    ValidatedJson(req): ValidatedJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let response = state
        .replies
        .generate(
            identity.user_id,
            &req.email_text,
            &req.tone,
            req.custom_prompt.as_deref(),
        )
        .await?;

    Ok(Json(GenerateResponse { response }))
}

/// GET /history - List the caller's generated replies, newest first.
#[utoipa::path(
    get,
    path = "/history",
    tag = "reply",
    responses(
        (status = 200, description = "Generated replies", body = HistoryResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn history(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<HistoryResponse>, ApiError> {
    let records = state.replies.history(identity.user_id).await?;

    Ok(Json(HistoryResponse {
        emails: records.into_iter().map(HistoryItem::from).collect(),
    }))
}
