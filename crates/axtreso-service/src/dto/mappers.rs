//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use axtreso_core::entities::{
    AuditLog, NotificationSettings, Report, ReportExport, Salon, Transaction, User,
};
use axtreso_core::DailyPoint;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::responses::{
    AuditLogResponse, BreakdownSlice, ChartPoint, NotificationSettingsResponse,
    ReportExportResponse, ReportResponse, SalonResponse, TransactionResponse, UserResponse,
};

/// Float for charting; the exact decimal stays in every stored and summed value
fn chart_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            login_method: user.credential.login_method(),
            last_signed_in: user.last_signed_in,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Salon Mappers
// ============================================================================

impl From<&Salon> for SalonResponse {
    fn from(salon: &Salon) -> Self {
        Self {
            id: salon.id,
            manager_id: salon.manager_id,
            name: salon.name.clone(),
            city: salon.city,
            email: salon.email.clone(),
            phone: salon.phone.clone(),
            status: salon.status,
            created_at: salon.created_at,
            updated_at: salon.updated_at,
        }
    }
}

impl From<Salon> for SalonResponse {
    fn from(salon: Salon) -> Self {
        Self::from(&salon)
    }
}

impl From<AuditLog> for AuditLogResponse {
    fn from(entry: AuditLog) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            salon_id: entry.salon_id,
            action: entry.action,
            details: entry.details,
            created_at: entry.created_at,
        }
    }
}

// ============================================================================
// Transaction Mappers
// ============================================================================

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            salon_id: tx.salon_id,
            transaction_type: tx.transaction_type,
            designation: tx.designation.clone(),
            amount: tx.amount,
            comment: tx.comment.clone(),
            date: tx.date,
            created_at: tx.created_at,
            updated_at: tx.updated_at,
        }
    }
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self::from(&tx)
    }
}

// ============================================================================
// Report Mappers
// ============================================================================

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            salon_id: report.salon_id,
            generated_by: report.generated_by,
            start_date: report.period.start(),
            end_date: report.period.end(),
            totals: report.totals,
            encaissements_breakdown: report.encaissements_breakdown,
            decaissements_breakdown: report.decaissements_breakdown,
            momentum: report.momentum,
            encaissements_interpretation: report.narrative.encaissements_interpretation,
            decaissements_interpretation: report.narrative.decaissements_interpretation,
            momentum_interpretation: report.narrative.momentum_interpretation,
            personalized_advice: report.narrative.personalized_advice,
            admin_comments: report.narrative.admin_comments,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

impl From<ReportExport> for ReportExportResponse {
    fn from(export: ReportExport) -> Self {
        Self {
            id: export.id,
            report_id: export.report_id,
            format: export.format,
            file_key: export.file_key,
            file_url: export.file_url,
            created_at: export.created_at,
        }
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<NotificationSettings> for NotificationSettingsResponse {
    fn from(settings: NotificationSettings) -> Self {
        Self {
            salon_id: settings.salon_id,
            daily_reminder: settings.daily_reminder,
            inactivity_alert: settings.inactivity_alert,
            report_notification: settings.report_notification,
            updated_at: settings.updated_at,
        }
    }
}

// ============================================================================
// Chart Mappers
// ============================================================================

impl From<&DailyPoint> for ChartPoint {
    fn from(point: &DailyPoint) -> Self {
        Self {
            date: point.date,
            encaissements: chart_value(point.total_in),
            decaissements: chart_value(point.total_out),
            balance: chart_value(point.balance),
        }
    }
}

impl From<(&String, &Decimal)> for BreakdownSlice {
    fn from((designation, amount): (&String, &Decimal)) -> Self {
        Self {
            designation: designation.clone(),
            amount: chart_value(*amount),
        }
    }
}
