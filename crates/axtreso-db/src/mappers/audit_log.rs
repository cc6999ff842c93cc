//! Audit log entity <-> model mapper

use axtreso_core::entities::AuditLog;

use crate::models::AuditLogModel;

impl From<AuditLogModel> for AuditLog {
    fn from(model: AuditLogModel) -> Self {
        AuditLog {
            id: model.id,
            user_id: model.user_id,
            salon_id: model.salon_id,
            action: model.action,
            details: model.details,
            created_at: model.created_at,
        }
    }
}
