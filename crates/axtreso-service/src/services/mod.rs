//! Business logic services
//!
//! Every operation checks identity, then role and ownership, then touches
//! data, then writes a best-effort audit entry for mutations.

pub mod access;
pub mod audit;
pub mod auth;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod notification;
pub mod report;
pub mod reporting;
pub mod salon;
pub mod transaction;

// Re-export all services for convenience
pub use access::{authorize_salon, Actor, SalonAccess};
pub use auth::{AuthService, AuthSession};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use report::{ExportDownload, ReportService};
pub use reporting::{render_plain_text, FileReportExporter, SummaryReportGenerator};
pub use salon::SalonService;
pub use transaction::TransactionService;
