//! Tone catalogue handler.

use axum::Json;

use crate::reply::TONES;
use crate::web::dto::{ToneResponse, TonesResponse};

/// GET /tones - Tones offered by the UI.
#[utoipa::path(
    get,
    path = "/tones",
    tag = "reply",
    responses(
        (status = 200, description = "Tone catalogue", body = TonesResponse)
    )
)]
pub async fn list_tones() -> Json<TonesResponse> {
    Json(TonesResponse {
        tones: TONES.iter().map(ToneResponse::from).collect(),
    })
}
