//! Client side of MailAssist.
//!
//! [`ApiClient`] speaks the REST API; [`ViewState`] mirrors the single-page
//! UI's state and actions on top of it.

mod api;
mod view;

pub use api::ApiClient;
pub use view::ViewState;
