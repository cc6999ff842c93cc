//! Audit log entity - append-only trace of mutating actions

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: i64,
    pub user_id: i64,
    pub salon_id: Option<i64>,
    /// Free-text action tag, e.g. `transaction_created_encaissement`
    pub action: String,
    pub details: JsonValue,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub user_id: i64,
    pub salon_id: Option<i64>,
    pub action: String,
    pub details: JsonValue,
}
