//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Salon not found: {0}")]
    SalonNotFound(i64),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(i64),

    #[error("Report not found: {0}")]
    ReportNotFound(i64),

    #[error("Report export not found: {0}")]
    ExportNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Amount must be strictly positive")]
    NonPositiveAmount,

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("This account signs in with an external identity and has no password")]
    PasswordLoginUnavailable,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Salon is not managed by the current user")]
    NotSalonOwner,

    #[error("Administrator access required")]
    AdminRequired,

    #[error("Salon manager access required")]
    ManagerRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Data store unavailable")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::SalonNotFound(_) => "UNKNOWN_SALON",
            Self::TransactionNotFound(_) => "UNKNOWN_TRANSACTION",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",
            Self::ExportNotFound(_) => "UNKNOWN_EXPORT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::NonPositiveAmount => "INVALID_AMOUNT",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::PasswordLoginUnavailable => "PASSWORD_LOGIN_UNAVAILABLE",

            // Authorization
            Self::NotSalonOwner => "NOT_SALON_OWNER",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::ManagerRequired => "MANAGER_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::SalonNotFound(_)
                | Self::TransactionNotFound(_)
                | Self::ReportNotFound(_)
                | Self::ExportNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::NonPositiveAmount
                | Self::InvalidDateRange { .. }
                | Self::PasswordLoginUnavailable
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotSalonOwner | Self::AdminRequired | Self::ManagerRequired
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Check if the backing store could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable)
    }
}
