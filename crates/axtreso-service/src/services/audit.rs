//! Best-effort audit trail

use axtreso_core::entities::NewAuditLog;
use serde_json::Value as JsonValue;
use tracing::warn;

use super::access::Actor;
use super::context::ServiceContext;

/// Append an audit entry; a failed write is logged and never fails the caller
pub(crate) async fn record(
    ctx: &ServiceContext,
    actor: Actor,
    salon_id: Option<i64>,
    action: impl Into<String>,
    details: JsonValue,
) {
    let entry = NewAuditLog {
        user_id: actor.user_id,
        salon_id,
        action: action.into(),
        details,
    };

    if let Err(e) = ctx.audit_repo().create(&entry).await {
        warn!(
            action = %entry.action,
            user_id = actor.user_id,
            error = %e,
            "Failed to write audit log"
        );
    }
}
