//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Money is
//! serialized as decimal strings with two places, except chart points, which
//! are floats for plotting.

use std::collections::BTreeMap;

use axtreso_core::{City, ExportFormat, Momentum, Role, SalonStatus, Totals, TransactionType};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value as JsonValue;

// ============================================================================
// User Responses
// ============================================================================

/// Signed-in user; never includes credentials
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Role,
    pub login_method: &'static str,
    pub last_signed_in: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Body returned by login and registration; the token travels in the cookie
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub salon: Option<SalonResponse>,
}

// ============================================================================
// Salon Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SalonResponse {
    pub id: i64,
    pub manager_id: i64,
    pub name: String,
    pub city: City,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: SalonStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub id: i64,
    pub user_id: i64,
    pub salon_id: Option<i64>,
    pub action: String,
    pub details: JsonValue,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Transaction Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub salon_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub designation: String,
    pub amount: Decimal,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Report Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: i64,
    pub salon_id: i64,
    pub generated_by: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub totals: Totals,
    pub encaissements_breakdown: BTreeMap<String, Decimal>,
    pub decaissements_breakdown: BTreeMap<String, Decimal>,
    pub momentum: Momentum,
    pub encaissements_interpretation: Option<String>,
    pub decaissements_interpretation: Option<String>,
    pub momentum_interpretation: Option<String>,
    pub personalized_advice: Option<String>,
    pub admin_comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportExportResponse {
    pub id: i64,
    pub report_id: i64,
    pub format: ExportFormat,
    pub file_key: String,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Notification Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotificationSettingsResponse {
    pub salon_id: i64,
    pub daily_reminder: bool,
    pub inactivity_alert: bool,
    pub report_notification: bool,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// One day of the trend chart
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub encaissements: f64,
    pub decaissements: f64,
    pub balance: f64,
}

/// One slice of a breakdown chart
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownSlice {
    pub designation: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalonDashboardResponse {
    pub salon: SalonResponse,
    /// Calendar day in the salon's city
    pub today: NaiveDate,
    pub today_totals: Totals,
    pub month_totals: Totals,
    pub trend: Vec<ChartPoint>,
    pub month_encaissements: Vec<BreakdownSlice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalonTotalsResponse {
    pub salon: SalonResponse,
    pub totals: Totals,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminOverviewResponse {
    pub period_days: u32,
    pub salons: Vec<SalonTotalsResponse>,
    pub combined: Totals,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
