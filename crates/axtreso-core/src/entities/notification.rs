//! Per-salon notification preferences

use chrono::{DateTime, Utc};

/// Notification toggles, one row per salon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub salon_id: i64,
    pub daily_reminder: bool,
    pub inactivity_alert: bool,
    pub report_notification: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NotificationSettings {
    /// Defaults applied when a salon is registered: everything enabled
    pub fn defaults_for(salon_id: i64) -> Self {
        let now = Utc::now();
        Self {
            salon_id,
            daily_reminder: true,
            inactivity_alert: true,
            report_notification: true,
            created_at: now,
            updated_at: now,
        }
    }
}
