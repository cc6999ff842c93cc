//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use axtreso_core::{City, ExportFormat, TransactionType};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        Ok(())
    } else {
        let mut err = ValidationError::new("positive_amount");
        err.message = Some("Amount must be greater than zero".into());
        Err(err)
    }
}

/// Salon names and designations: 2-255 characters once surrounding blanks are dropped
fn validate_label(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if (2..=255).contains(&len) {
        Ok(())
    } else {
        let mut err = ValidationError::new("length");
        err.message = Some("Must be 2-255 characters".into());
        Err(err)
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Manager self-registration: creates the account and its salon
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterManagerRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_label"))]
    pub salon_name: String,

    pub city: City,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

/// Manager login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-in with a token issued by the identity provider
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExternalLoginRequest {
    #[validate(length(min = 1, message = "Identity token is required"))]
    pub identity_token: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub new_password: String,
}

// ============================================================================
// Salon Requests
// ============================================================================

/// Partial salon update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSalonRequest {
    #[validate(custom(function = "validate_label"))]
    pub name: Option<String>,

    pub city: Option<City>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
}

/// Administrator reset of a manager's password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetSalonPasswordRequest {
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogQuery {
    pub limit: Option<i64>,
}

// ============================================================================
// Transaction Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    #[validate(custom(function = "validate_label"))]
    pub designation: String,

    #[validate(custom(function = "validate_positive_amount"))]
    pub amount: Decimal,

    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    pub comment: Option<String>,

    /// When the movement happened; defaults to now
    pub date: Option<DateTime<Utc>>,
}

/// Partial transaction update; the type never changes
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTransactionRequest {
    #[validate(custom(function = "validate_label"))]
    pub designation: Option<String>,

    #[validate(custom(function = "validate_positive_amount"))]
    pub amount: Option<Decimal>,

    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    pub comment: Option<String>,

    pub date: Option<DateTime<Utc>>,
}

/// Transaction list filters; dates are calendar days in the salon's city
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub designation: Option<String>,
    pub search: Option<String>,
}

// ============================================================================
// Report Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateReportRequest {
    #[validate(range(min = 1, message = "Invalid salon id"))]
    pub salon_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Administrator-written narrative; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReportNotesRequest {
    #[validate(length(max = 10000, message = "Advice must be at most 10000 characters"))]
    pub personalized_advice: Option<String>,

    #[validate(length(max = 10000, message = "Comments must be at most 10000 characters"))]
    pub admin_comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExportReportRequest {
    pub format: ExportFormat,
}

// ============================================================================
// Notification Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNotificationSettingsRequest {
    pub daily_reminder: Option<bool>,
    pub inactivity_alert: Option<bool>,
    pub report_notification: Option<bool>,
}

// ============================================================================
// Dashboard Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    /// Days before today in the trend window
    pub days: Option<u32>,
}
