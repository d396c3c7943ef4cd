//! Router configuration for the web API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::dto;
use super::error::{ApiError, ErrorBody, ErrorCode};
use super::handlers::{self, AppState};
use super::middleware::{create_cors_layer, jwt_auth};
use crate::config::ServerConfig;

/// OpenAPI document for the web API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::signup,
        handlers::auth::login,
        handlers::auth::me,
        handlers::reply::generate,
        handlers::reply::history,
        handlers::tones::list_tones,
    ),
    components(schemas(
        dto::SignupRequest,
        dto::LoginRequest,
        dto::GenerateRequest,
        dto::TokenResponse,
        dto::GenerateResponse,
        dto::HistoryItem,
        dto::HistoryResponse,
        dto::MeResponse,
        dto::ToneResponse,
        dto::TonesResponse,
        ErrorBody,
        ErrorCode,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "reply", description = "Reply generation and history")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the main API router.
///
/// API routes live at the root. When `serve_static` is set, unknown paths
/// fall back to the compiled UI with `index.html` as the SPA entry point.
pub fn create_router(app_state: Arc<AppState>, config: &ServerConfig) -> Router {
    let public_routes = Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/tones", get(handlers::list_tones));

    // Handlers here take AuthUser
    let protected_routes = Router::new()
        .route("/me", get(handlers::me))
        .route("/generate", post(handlers::generate))
        .route("/history", get(handlers::history));

    let tokens = app_state.tokens.clone();

    let mut router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&config.cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let tokens = tokens.clone();
                    jwt_auth(tokens, req, next)
                })),
        )
        .with_state(app_state)
        .merge(create_health_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if config.serve_static {
        let root = Path::new(&config.static_path);
        tracing::info!("Serving static UI from {}", root.display());
        router = router.fallback_service(
            ServeDir::new(root).fallback(ServeFile::new(root.join("index.html"))),
        );
    } else {
        router = router.fallback(not_found);
    }

    router
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
