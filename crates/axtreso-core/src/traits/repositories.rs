//! Repository traits (ports) - define the interface for data access
//!
//! Reads return `Ok(None)` or an empty list when a record is absent and also
//! when the store cannot be reached. Writes fail with
//! [`DomainError::StoreUnavailable`] in the latter case.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    AuditLog, NewAuditLog, NewReportExport, NewSalon, NewTransaction, NewUser,
    NotificationSettings, Report, ReportDraft, ReportExport, ReportNarrative, Salon,
    SalonStatus, Transaction, TransactionType, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    ///
    /// Fails with [`DomainError::EmailAlreadyExists`] on a duplicate email.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Insert or refresh an externally authenticated user, keyed by `open_id`
    async fn upsert_external(&self, user: &NewUser) -> RepoResult<User>;

    /// Replace the password hash of a password-login user
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;

    /// Record a successful sign-in
    async fn touch_last_signed_in(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()>;
}

// ============================================================================
// Salon Repository
// ============================================================================

#[async_trait]
pub trait SalonRepository: Send + Sync {
    /// Find salon by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Salon>>;

    /// Salons of a manager, oldest first
    async fn find_by_manager(&self, manager_id: i64) -> RepoResult<Vec<Salon>>;

    /// Every salon, newest first
    async fn list_all(&self) -> RepoResult<Vec<Salon>>;

    /// Create a new salon
    async fn create(&self, salon: &NewSalon) -> RepoResult<Salon>;

    /// Update name, city, and contact details
    async fn update(&self, salon: &Salon) -> RepoResult<()>;

    /// Change the operating status
    async fn update_status(&self, id: i64, status: SalonStatus) -> RepoResult<()>;

    /// Delete a salon and everything attached to it
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Transaction Repository
// ============================================================================

/// Optional transaction filters, combined with AND
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Inclusive lower bound on the transaction date
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the transaction date
    pub to: Option<DateTime<Utc>>,
    pub transaction_type: Option<TransactionType>,
    /// Exact designation match
    pub designation: Option<String>,
    /// Case-insensitive substring of the designation
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Filter covering an inclusive instant range
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    /// Check a transaction against every set filter
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.from.is_none_or(|from| tx.date >= from)
            && self.to.is_none_or(|to| tx.date <= to)
            && self
                .transaction_type
                .is_none_or(|kind| tx.transaction_type == kind)
            && self
                .designation
                .as_deref()
                .is_none_or(|designation| tx.designation == designation)
            && self.search.as_deref().is_none_or(|needle| {
                tx.designation
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            })
    }
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Find transaction by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Transaction>>;

    /// Find a transaction only if it belongs to the given salon
    async fn find_in_salon(&self, salon_id: i64, id: i64) -> RepoResult<Option<Transaction>>;

    /// Transactions of a salon matching the filter, most recent date first
    async fn list_by_salon(
        &self,
        salon_id: i64,
        filter: &TransactionFilter,
    ) -> RepoResult<Vec<Transaction>>;

    /// Record a new transaction
    async fn create(&self, transaction: &NewTransaction) -> RepoResult<Transaction>;

    /// Update designation, amount, comment, and date
    async fn update(&self, transaction: &Transaction) -> RepoResult<()>;

    /// Delete a transaction
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find report by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Report>>;

    /// Reports of a salon, newest first
    async fn list_by_salon(&self, salon_id: i64) -> RepoResult<Vec<Report>>;

    /// Persist a generated report
    async fn create(&self, draft: &ReportDraft) -> RepoResult<Report>;

    /// Replace the administrator-written narrative fields
    async fn update_notes(&self, id: i64, narrative: &ReportNarrative) -> RepoResult<()>;

    /// Delete a report and its exports
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

#[async_trait]
pub trait ReportExportRepository: Send + Sync {
    /// Record a produced artifact
    async fn create(&self, export: &NewReportExport) -> RepoResult<ReportExport>;

    /// Find export by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ReportExport>>;

    /// Exports of a report, newest first
    async fn list_by_report(&self, report_id: i64) -> RepoResult<Vec<ReportExport>>;
}

// ============================================================================
// Notification Settings Repository
// ============================================================================

#[async_trait]
pub trait NotificationSettingsRepository: Send + Sync {
    /// Settings of a salon
    async fn find_by_salon(&self, salon_id: i64) -> RepoResult<Option<NotificationSettings>>;

    /// Insert or replace the settings row of a salon
    async fn upsert(&self, settings: &NotificationSettings) -> RepoResult<NotificationSettings>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an entry
    async fn create(&self, entry: &NewAuditLog) -> RepoResult<()>;

    /// Latest entries for a salon, newest first
    async fn list_by_salon(&self, salon_id: i64, limit: i64) -> RepoResult<Vec<AuditLog>>;
}

// ============================================================================
// Health
// ============================================================================

/// Readiness of the backing store
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn is_ready(&self) -> bool;
}
