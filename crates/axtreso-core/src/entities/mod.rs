//! Domain entities - core business objects

mod audit_log;
mod notification;
mod report;
mod salon;
mod transaction;
mod user;

pub use audit_log::{AuditLog, NewAuditLog};
pub use notification::NotificationSettings;
pub use report::{
    ExportFormat, Momentum, NewReportExport, PeakDay, Report, ReportDraft, ReportExport,
    ReportNarrative,
};
pub use salon::{NewSalon, Salon, SalonStatus};
pub use transaction::{NewTransaction, Transaction, TransactionType};
pub use user::{Credential, NewUser, User};
