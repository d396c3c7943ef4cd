//! Authentication module for MailAssist.
//!
//! This module provides password hashing, signed bearer tokens and the
//! signup/login service built on top of them.

mod password;
mod service;
mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use service::AuthService;
pub use token::{Identity, TokenClaims, TokenService};
