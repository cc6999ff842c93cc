//! Notification settings service
//!
//! Only the manager owning a salon reads or changes its toggles.

use axtreso_core::entities::NotificationSettings;
use chrono::Utc;
use serde_json::json;
use tracing::instrument;

use crate::dto::{NotificationSettingsResponse, UpdateNotificationSettingsRequest};

use super::access::{salon_for, Actor, SalonAccess};
use super::audit;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification settings service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Settings of the caller's salon; defaults when none were stored
    #[instrument(skip(self))]
    pub async fn get_settings(
        &self,
        actor: Actor,
        salon_id: i64,
    ) -> ServiceResult<NotificationSettingsResponse> {
        let salon = salon_for(self.ctx, actor, SalonAccess::ManageOwn, salon_id).await?;
        let settings = self.current(salon.id).await?;
        Ok(NotificationSettingsResponse::from(settings))
    }

    /// Change some toggles; absent fields keep their value
    #[instrument(skip(self, request))]
    pub async fn update_settings(
        &self,
        actor: Actor,
        salon_id: i64,
        request: UpdateNotificationSettingsRequest,
    ) -> ServiceResult<NotificationSettingsResponse> {
        let salon = salon_for(self.ctx, actor, SalonAccess::ManageOwn, salon_id).await?;
        let mut settings = self.current(salon.id).await?;

        if let Some(value) = request.daily_reminder {
            settings.daily_reminder = value;
        }
        if let Some(value) = request.inactivity_alert {
            settings.inactivity_alert = value;
        }
        if let Some(value) = request.report_notification {
            settings.report_notification = value;
        }
        settings.updated_at = Utc::now();

        let stored = self.ctx.notification_repo().upsert(&settings).await?;

        audit::record(
            self.ctx,
            actor,
            Some(salon.id),
            "notification_settings_updated",
            json!({
                "daily_reminder": stored.daily_reminder,
                "inactivity_alert": stored.inactivity_alert,
                "report_notification": stored.report_notification,
            }),
        )
        .await;

        Ok(NotificationSettingsResponse::from(stored))
    }

    async fn current(&self, salon_id: i64) -> ServiceResult<NotificationSettings> {
        Ok(self
            .ctx
            .notification_repo()
            .find_by_salon(salon_id)
            .await?
            .unwrap_or_else(|| NotificationSettings::defaults_for(salon_id)))
    }
}
