//! Database models - SQLx-compatible structs for PostgreSQL tables

mod audit_log;
mod notification;
mod report;
mod salon;
mod transaction;
mod user;

pub use audit_log::AuditLogModel;
pub use notification::NotificationSettingsModel;
pub use report::{ReportExportModel, ReportModel};
pub use salon::SalonModel;
pub use transaction::TransactionModel;
pub use user::UserModel;
