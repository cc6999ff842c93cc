//! Salon service
//!
//! Salon lookups for managers and administrators, plus the administrator-only
//! platform operations: status toggling, password reset, deletion, and the
//! audit trail.

use axtreso_core::entities::{Credential, SalonStatus};
use axtreso_core::DomainError;
use chrono::Utc;
use serde_json::json;
use tracing::{info, instrument};

use crate::dto::{AuditLogResponse, ResetSalonPasswordRequest, SalonResponse, UpdateSalonRequest};

use super::access::{salon_for, Actor, SalonAccess};
use super::audit;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Audit entries returned when no limit is given
pub const DEFAULT_AUDIT_LIMIT: i64 = 100;
/// Largest audit page a caller may ask for
pub const MAX_AUDIT_LIMIT: i64 = 500;

/// Salon service
pub struct SalonService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SalonService<'a> {
    /// Create a new SalonService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// First salon of the calling manager, if any
    ///
    /// Administrators own no salon and get `None`; plain users are refused.
    #[instrument(skip(self))]
    pub async fn get_my_salon(&self, actor: Actor) -> ServiceResult<Option<SalonResponse>> {
        if actor.role.is_admin() {
            return Ok(None);
        }
        actor.require_manager()?;

        let salon = self
            .ctx
            .salon_repo()
            .find_by_manager(actor.user_id)
            .await?
            .into_iter()
            .next();

        Ok(salon.map(SalonResponse::from))
    }

    #[instrument(skip(self))]
    pub async fn get_salon_by_id(&self, actor: Actor, salon_id: i64) -> ServiceResult<SalonResponse> {
        let salon = salon_for(self.ctx, actor, SalonAccess::Read, salon_id).await?;
        Ok(SalonResponse::from(salon))
    }

    /// Every salon on the platform, newest first
    #[instrument(skip(self))]
    pub async fn get_all_salons(&self, actor: Actor) -> ServiceResult<Vec<SalonResponse>> {
        actor.require_admin()?;

        let salons = self.ctx.salon_repo().list_all().await?;
        Ok(salons.into_iter().map(SalonResponse::from).collect())
    }

    /// Edit name, city, and contact details of the caller's salon
    #[instrument(skip(self, request))]
    pub async fn update_salon(
        &self,
        actor: Actor,
        salon_id: i64,
        request: UpdateSalonRequest,
    ) -> ServiceResult<SalonResponse> {
        let mut salon = salon_for(self.ctx, actor, SalonAccess::ManageOwn, salon_id).await?;

        if let Some(name) = request.name {
            salon.name = name.trim().to_string();
        }
        if let Some(city) = request.city {
            salon.city = city;
        }
        if let Some(email) = request.email {
            salon.email = Some(email.trim().to_lowercase()).filter(|e| !e.is_empty());
        }
        if let Some(phone) = request.phone {
            salon.phone = Some(phone.trim().to_string()).filter(|p| !p.is_empty());
        }
        salon.updated_at = Utc::now();

        self.ctx.salon_repo().update(&salon).await?;

        audit::record(
            self.ctx,
            actor,
            Some(salon.id),
            "salon_updated",
            json!({ "name": salon.name, "city": salon.city }),
        )
        .await;

        Ok(SalonResponse::from(salon))
    }

    /// Flip a salon between active and inactive
    #[instrument(skip(self))]
    pub async fn toggle_salon_status(
        &self,
        actor: Actor,
        salon_id: i64,
    ) -> ServiceResult<SalonResponse> {
        let mut salon = salon_for(self.ctx, actor, SalonAccess::Administer, salon_id).await?;

        let status = match salon.status {
            SalonStatus::Active => SalonStatus::Inactive,
            SalonStatus::Inactive => SalonStatus::Active,
        };
        self.ctx.salon_repo().update_status(salon.id, status).await?;

        info!(salon_id, %status, "Salon status changed");
        audit::record(
            self.ctx,
            actor,
            Some(salon.id),
            format!("salon_status_changed_to_{status}"),
            json!({ "previous": salon.status, "status": status }),
        )
        .await;

        salon.status = status;
        salon.updated_at = Utc::now();
        Ok(SalonResponse::from(salon))
    }

    /// Set a new password for the salon's manager
    #[instrument(skip(self, request))]
    pub async fn reset_salon_password(
        &self,
        actor: Actor,
        salon_id: i64,
        request: ResetSalonPasswordRequest,
    ) -> ServiceResult<()> {
        let salon = salon_for(self.ctx, actor, SalonAccess::Administer, salon_id).await?;

        let manager = self
            .ctx
            .user_repo()
            .find_by_id(salon.manager_id)
            .await?
            .ok_or(DomainError::UserNotFound(salon.manager_id))?;

        if let Credential::External { .. } = manager.credential {
            return Err(DomainError::PasswordLoginUnavailable.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.new_password)?;
        self.ctx
            .user_repo()
            .update_password(manager.id, &password_hash)
            .await?;

        info!(salon_id, manager_id = manager.id, "Manager password reset");
        audit::record(
            self.ctx,
            actor,
            Some(salon.id),
            "salon_password_reset",
            json!({ "manager_id": manager.id }),
        )
        .await;

        Ok(())
    }

    /// Delete a salon with its transactions, reports, and settings
    #[instrument(skip(self))]
    pub async fn delete_salon(&self, actor: Actor, salon_id: i64) -> ServiceResult<()> {
        let salon = salon_for(self.ctx, actor, SalonAccess::Administer, salon_id).await?;

        self.ctx.salon_repo().delete(salon.id).await?;

        info!(salon_id, "Salon deleted");
        // The salon row is gone, so the entry carries the id in its details
        audit::record(
            self.ctx,
            actor,
            None,
            "salon_deleted",
            json!({ "salon_id": salon.id, "name": salon.name, "manager_id": salon.manager_id }),
        )
        .await;

        Ok(())
    }

    /// Most recent audit entries of a salon, newest first
    #[instrument(skip(self))]
    pub async fn get_audit_logs(
        &self,
        actor: Actor,
        salon_id: i64,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<AuditLogResponse>> {
        let salon = salon_for(self.ctx, actor, SalonAccess::Administer, salon_id).await?;

        let limit = limit.unwrap_or(DEFAULT_AUDIT_LIMIT).clamp(1, MAX_AUDIT_LIMIT);
        let entries = self.ctx.audit_repo().list_by_salon(salon.id, limit).await?;

        Ok(entries.into_iter().map(AuditLogResponse::from).collect())
    }
}
