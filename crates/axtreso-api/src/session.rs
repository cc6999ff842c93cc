//! Session cookie handling
//!
//! The session token travels in an HttpOnly cookie; the `Set-Cookie` values
//! are built here so every handler issues them the same way.

use axtreso_common::SessionConfig;
use axum::http::{header, HeaderValue};
use axum::response::{AppendHeaders, IntoResponse, Response};

use crate::response::ApiError;

fn cookie_value(config: &SessionConfig, token: &str, max_age: i64) -> Result<HeaderValue, ApiError> {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        config.cookie_name, token, max_age
    );
    if config.secure_cookie {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).map_err(ApiError::internal)
}

/// `Set-Cookie` value carrying a fresh session token
pub fn session_cookie(config: &SessionConfig, token: &str) -> Result<HeaderValue, ApiError> {
    cookie_value(config, token, config.ttl_seconds)
}

/// `Set-Cookie` value that makes the browser drop the session
pub fn clear_session_cookie(config: &SessionConfig) -> Result<HeaderValue, ApiError> {
    cookie_value(config, "", 0)
}

/// Attach a `Set-Cookie` header to any response
pub fn with_cookie(cookie: HeaderValue, body: impl IntoResponse) -> Response {
    (AppendHeaders([(header::SET_COOKIE, cookie)]), body).into_response()
}
