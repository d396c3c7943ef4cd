//! Middleware for the web API.

pub mod auth;
pub mod cors;

pub use auth::{jwt_auth, AuthUser};
pub use cors::create_cors_layer;
