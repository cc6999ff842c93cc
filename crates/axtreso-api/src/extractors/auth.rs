//! Session extractors
//!
//! The session token is read from the session cookie, or from an
//! `Authorization: Bearer` header when no cookie is present.

use axtreso_core::entities::User;
use axtreso_service::{Actor, AuthService};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization, Cookie},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Raw session token of the request, if any
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let cookie_name = &app_state.config().session.cookie_name;

        if let Ok(TypedHeader(cookie)) =
            TypedHeader::<Cookie>::from_request_parts(parts, state).await
        {
            if let Some(token) = cookie.get(cookie_name).filter(|t| !t.is_empty()) {
                return Ok(SessionToken(Some(token.to_string())));
            }
        }

        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());

        Ok(SessionToken(bearer))
    }
}

/// Signed-in user resolved from the session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// Identity used for access checks
    pub fn actor(&self) -> Actor {
        Actor::from(&self.user)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let SessionToken(token) = SessionToken::from_request_parts(parts, state).await?;
        let token = token.ok_or(ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let user = AuthService::new(app_state.service_context())
            .authenticate(&token)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected session token");
                ApiError::from(e)
            })?;

        Ok(AuthUser { user })
    }
}
