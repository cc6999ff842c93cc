//! Axum extractors for request handling
//!
//! Custom extractors for sessions, validation, and parameter parsing.

mod auth;
mod params;
mod validated;

pub use auth::{AuthUser, SessionToken};
pub use params::{ApiQuery, IdPath};
pub use validated::ValidatedJson;
