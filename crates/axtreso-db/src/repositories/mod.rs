//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in axtreso-core.
//! Each repository shares one [`Database`](crate::Database) handle.

mod audit_log;
mod error;
mod notification;
mod report;
mod salon;
mod transaction;
mod user;

pub use audit_log::PgAuditLogRepository;
pub use notification::PgNotificationSettingsRepository;
pub use report::{PgReportExportRepository, PgReportRepository};
pub use salon::PgSalonRepository;
pub use transaction::PgTransactionRepository;
pub use user::PgUserRepository;
