//! Web API module for MailAssist.
//!
//! This module provides the REST API used by the single-page UI: signup and
//! login, reply generation, and history, plus an OpenAPI document and
//! optional static hosting of the compiled UI.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorCode};
pub use handlers::AppState;
pub use router::{create_router, ApiDoc};
pub use server::WebServer;
