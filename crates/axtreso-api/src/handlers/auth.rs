//! Authentication handlers
//!
//! Sign-in endpoints answer with the user in the body and the session token
//! in a cookie.

use axtreso_service::dto::{
    AuthResponse, ChangePasswordRequest, ExternalLoginRequest, LoginRequest,
    RegisterManagerRequest, UserResponse,
};
use axtreso_service::{AuthService, AuthSession};
use axum::{extract::State, http::HeaderValue, response::Response, Json};
use serde_json::{json, Value};

use crate::extractors::{AuthUser, SessionToken, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::session::{clear_session_cookie, session_cookie, with_cookie};
use crate::state::AppState;

fn signed_in(state: &AppState, session: AuthSession) -> ApiResult<(HeaderValue, Json<AuthResponse>)> {
    let cookie = session_cookie(&state.config().session, &session.token)?;
    Ok((cookie, Json(session.body)))
}

/// Current user, or `null` without a usable session
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Json<Option<UserResponse>> {
    let service = AuthService::new(state.service_context());
    Json(service.me(token.as_deref()).await)
}

/// Register a manager and their salon
///
/// POST /auth/manager/register
pub async fn register_manager(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterManagerRequest>,
) -> ApiResult<Response> {
    let service = AuthService::new(state.service_context());
    let session = service.register_manager(request).await?;
    let (cookie, body) = signed_in(&state, session)?;
    Ok(with_cookie(cookie, Created(body)))
}

/// Sign in with email and password
///
/// POST /auth/manager/login
pub async fn login_manager(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Response> {
    let service = AuthService::new(state.service_context());
    let session = service.login_manager(request).await?;
    let (cookie, body) = signed_in(&state, session)?;
    Ok(with_cookie(cookie, body))
}

/// Sign in with an identity provider token
///
/// POST /auth/external/login
pub async fn login_external(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ExternalLoginRequest>,
) -> ApiResult<Response> {
    let service = AuthService::new(state.service_context());
    let session = service.login_external(request).await?;
    let (cookie, body) = signed_in(&state, session)?;
    Ok(with_cookie(cookie, body))
}

/// Drop the session cookie, whether or not a session exists
///
/// POST /auth/logout
pub async fn logout(State(state): State<AppState>) -> ApiResult<Response> {
    let cookie = clear_session_cookie(&state.config().session)?;
    let body: Json<Value> = Json(json!({ "success": true }));
    Ok(with_cookie(cookie, body))
}

/// POST /auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.change_password(&auth.user, request).await?;
    Ok(NoContent)
}
