//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AuditLogQuery, ChangePasswordRequest, CreateTransactionRequest, DashboardQuery,
    ExportReportRequest, ExternalLoginRequest, GenerateReportRequest, LoginRequest,
    RegisterManagerRequest, ResetSalonPasswordRequest, TransactionQuery,
    UpdateNotificationSettingsRequest, UpdateReportNotesRequest, UpdateSalonRequest,
    UpdateTransactionRequest,
};

// Re-export commonly used response types
pub use responses::{
    AdminOverviewResponse, AuditLogResponse, AuthResponse, BreakdownSlice,
    ChartPoint, HealthChecks, HealthResponse, NotificationSettingsResponse, ReadinessResponse,
    ReportExportResponse, ReportResponse, SalonDashboardResponse, SalonResponse,
    SalonTotalsResponse, TransactionResponse, UserResponse,
};
