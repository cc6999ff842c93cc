//! Authentication service
//!
//! Handles manager registration and login, external sign-in, session
//! resolution, and password changes.

use axtreso_common::AppError;
use axtreso_core::entities::{Credential, NewSalon, NewUser, NotificationSettings, User};
use axtreso_core::{DomainError, Role};
use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    AuthResponse, ChangePasswordRequest, ExternalLoginRequest, LoginRequest,
    RegisterManagerRequest, SalonResponse, UserResponse,
};

use super::access::Actor;
use super::audit;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A freshly issued session
///
/// The token is handed to the transport layer for the cookie; only `body`
/// goes back to the client as JSON.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub body: AuthResponse,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a session token to its user
    ///
    /// A token for a user that no longer exists is invalid.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.session_tokens().verify(token)?;
        let user_id = claims.user_id()?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))
    }

    /// Current user for an optional session token, or `None`
    #[instrument(skip(self, token))]
    pub async fn me(&self, token: Option<&str>) -> Option<UserResponse> {
        let token = token?;
        match self.authenticate(token).await {
            Ok(user) => Some(UserResponse::from(&user)),
            Err(e) => {
                debug!(error = %e, "Ignoring unusable session");
                None
            }
        }
    }

    /// Register a salon manager together with their salon
    ///
    /// The user, the salon, and the default notification settings are
    /// written one after another, not in a single transaction.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register_manager(
        &self,
        request: RegisterManagerRequest,
    ) -> ServiceResult<AuthSession> {
        let email = request.email.trim().to_lowercase();

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(&NewUser {
                email: Some(email.clone()),
                name: request.name.filter(|n| !n.trim().is_empty()),
                role: Role::Manager,
                credential: Credential::Password { password_hash },
            })
            .await?;

        let salon = self
            .ctx
            .salon_repo()
            .create(&NewSalon {
                manager_id: user.id,
                name: request.salon_name.trim().to_string(),
                city: request.city,
                email: Some(email),
                phone: request.phone.filter(|p| !p.trim().is_empty()),
            })
            .await?;

        if let Err(e) = self
            .ctx
            .notification_repo()
            .upsert(&NotificationSettings::defaults_for(salon.id))
            .await
        {
            warn!(salon_id = salon.id, error = %e, "Failed to store default notification settings");
        }

        info!(user_id = user.id, salon_id = salon.id, "Manager registered");

        audit::record(
            self.ctx,
            Actor::from(&user),
            Some(salon.id),
            "manager_registered",
            json!({ "salon_name": salon.name, "city": salon.city }),
        )
        .await;

        let token = self.ctx.session_tokens().issue(user.id)?;
        Ok(AuthSession {
            token,
            body: AuthResponse {
                user: UserResponse::from(&user),
                salon: Some(SalonResponse::from(salon)),
            },
        })
    }

    /// Email and password sign-in for salon managers
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login_manager(&self, request: LoginRequest) -> ServiceResult<AuthSession> {
        let email = request.email.trim().to_lowercase();

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // External-identity accounts have no password to compare
        let Credential::Password { password_hash } = &user.credential else {
            return Err(AppError::InvalidCredentials.into());
        };
        self.ctx
            .password_service()
            .verify_or_error(&request.password, password_hash)?;

        self.touch_last_signed_in(user.id).await;
        info!(user_id = user.id, "Manager signed in");

        let salon = self
            .ctx
            .salon_repo()
            .find_by_manager(user.id)
            .await?
            .into_iter()
            .next();

        let token = self.ctx.session_tokens().issue(user.id)?;
        Ok(AuthSession {
            token,
            body: AuthResponse {
                user: UserResponse::from(&user),
                salon: salon.map(SalonResponse::from),
            },
        })
    }

    /// Sign in with a token from the identity provider
    ///
    /// The configured owner identity becomes an administrator; everyone else
    /// signs in as a plain user.
    #[instrument(skip(self, request))]
    pub async fn login_external(
        &self,
        request: ExternalLoginRequest,
    ) -> ServiceResult<AuthSession> {
        let identity = self
            .ctx
            .identity_tokens()
            .ok_or_else(|| ServiceError::validation("External sign-in is not configured"))?;
        let claims = identity.verify(&request.identity_token)?;

        let role = if self.ctx.owner_open_id() == Some(claims.open_id.as_str()) {
            Role::Admin
        } else {
            Role::User
        };

        let user = self
            .ctx
            .user_repo()
            .upsert_external(&NewUser {
                email: claims.email.map(|e| e.trim().to_lowercase()),
                name: claims.name,
                role,
                credential: Credential::External {
                    open_id: claims.open_id,
                },
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "External user signed in");

        let token = self.ctx.session_tokens().issue(user.id)?;
        Ok(AuthSession {
            token,
            body: AuthResponse {
                user: UserResponse::from(&user),
                salon: None,
            },
        })
    }

    /// Replace the caller's password after checking the current one
    #[instrument(skip(self, user, request), fields(user_id = user.id))]
    pub async fn change_password(
        &self,
        user: &User,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let actor = Actor::from(user);
        actor.require_manager()?;

        let password_hash = match &user.credential {
            Credential::Password { password_hash } => password_hash,
            Credential::External { .. } => return Err(DomainError::PasswordLoginUnavailable.into()),
        };
        self.ctx
            .password_service()
            .verify_or_error(&request.current_password, password_hash)?;

        let new_hash = self.ctx.password_service().hash(&request.new_password)?;
        self.ctx.user_repo().update_password(user.id, &new_hash).await?;

        info!(user_id = user.id, "Password changed");
        audit::record(self.ctx, actor, None, "password_changed", json!({})).await;

        Ok(())
    }

    async fn touch_last_signed_in(&self, user_id: i64) {
        if let Err(e) = self
            .ctx
            .user_repo()
            .touch_last_signed_in(user_id, Utc::now())
            .await
        {
            warn!(user_id, error = %e, "Failed to record sign-in time");
        }
    }
}
