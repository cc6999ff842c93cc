//! PostgreSQL implementation of NotificationSettingsRepository

use async_trait::async_trait;
use tracing::instrument;

use axtreso_core::entities::NotificationSettings;
use axtreso_core::error::DomainError;
use axtreso_core::traits::{NotificationSettingsRepository, RepoResult};

use crate::models::NotificationSettingsModel;
use crate::store::Database;

use super::error::{map_foreign_key_violation, recover_read};

/// PostgreSQL implementation of NotificationSettingsRepository
#[derive(Clone)]
pub struct PgNotificationSettingsRepository {
    db: Database,
}

impl PgNotificationSettingsRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationSettingsRepository for PgNotificationSettingsRepository {
    #[instrument(skip(self))]
    async fn find_by_salon(&self, salon_id: i64) -> RepoResult<Option<NotificationSettings>> {
        let Some(pool) = self.db.reader() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, NotificationSettingsModel>(
            r"
            SELECT salon_id, daily_reminder, inactivity_alert, report_notification,
                   created_at, updated_at
            FROM notification_settings
            WHERE salon_id = $1
            ",
        )
        .bind(salon_id)
        .fetch_optional(pool)
        .await;

        Ok(recover_read(row, "notification_settings.find_by_salon")?
            .map(NotificationSettings::from))
    }

    #[instrument(skip(self, settings), fields(salon_id = settings.salon_id))]
    async fn upsert(&self, settings: &NotificationSettings) -> RepoResult<NotificationSettings> {
        let pool = self.db.writer()?;

        let row = sqlx::query_as::<_, NotificationSettingsModel>(
            r"
            INSERT INTO notification_settings (salon_id, daily_reminder, inactivity_alert, report_notification)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (salon_id) DO UPDATE SET
                daily_reminder = EXCLUDED.daily_reminder,
                inactivity_alert = EXCLUDED.inactivity_alert,
                report_notification = EXCLUDED.report_notification,
                updated_at = NOW()
            RETURNING salon_id, daily_reminder, inactivity_alert, report_notification,
                      created_at, updated_at
            ",
        )
        .bind(settings.salon_id)
        .bind(settings.daily_reminder)
        .bind(settings.inactivity_alert)
        .bind(settings.report_notification)
        .fetch_one(pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::SalonNotFound(settings.salon_id)))?;

        Ok(NotificationSettings::from(row))
    }
}
