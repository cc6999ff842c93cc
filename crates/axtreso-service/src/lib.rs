//! # axtreso-service
//!
//! Application layer containing authorization checks, use cases, report
//! collaborators, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    Actor, AuthService, AuthSession, DashboardService, ExportDownload, FileReportExporter,
    NotificationService, ReportService, SalonService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SummaryReportGenerator, TransactionService,
};
