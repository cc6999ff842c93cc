//! Notification settings database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notification_settings table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationSettingsModel {
    pub salon_id: i64,
    pub daily_reminder: bool,
    pub inactivity_alert: bool,
    pub report_notification: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
