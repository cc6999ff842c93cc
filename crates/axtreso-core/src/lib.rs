//! # axtreso-core
//!
//! Domain layer containing entities, value objects, repository traits, reporting
//! collaborator traits, and the pure aggregation helpers used by dashboards and reports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod analytics;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use analytics::{breakdown, daily_series, momentum, top_n, totals, DailyPoint, Totals};
pub use entities::{
    AuditLog, Credential, ExportFormat, Momentum, NewAuditLog, NewReportExport, NewSalon,
    NewTransaction, NewUser, NotificationSettings, PeakDay, Report, ReportDraft, ReportExport,
    ReportNarrative, Salon, SalonStatus, Transaction, TransactionType, User,
};
pub use error::DomainError;
pub use traits::{
    AuditLogRepository, ExportArtifact, HealthProbe, NotificationSettingsRepository, RepoResult,
    ReportExportRepository, ReportExporter, ReportGenerator, ReportRepository, SalonRepository,
    TransactionFilter, TransactionRepository, UserRepository,
};
pub use value_objects::{City, DateRange, Role};
