//! Notification settings entity <-> model mapper

use axtreso_core::entities::NotificationSettings;

use crate::models::NotificationSettingsModel;

impl From<NotificationSettingsModel> for NotificationSettings {
    fn from(model: NotificationSettingsModel) -> Self {
        NotificationSettings {
            salon_id: model.salon_id,
            daily_reminder: model.daily_reminder,
            inactivity_alert: model.inactivity_alert,
            report_notification: model.report_notification,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
