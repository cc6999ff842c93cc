//! Traits (ports) implemented by the infrastructure and service layers

mod reporting;
mod repositories;

pub use reporting::{ExportArtifact, ReportExporter, ReportGenerator};
pub use repositories::{
    AuditLogRepository, HealthProbe, NotificationSettingsRepository, RepoResult,
    ReportExportRepository, ReportRepository, SalonRepository, TransactionFilter,
    TransactionRepository, UserRepository,
};
