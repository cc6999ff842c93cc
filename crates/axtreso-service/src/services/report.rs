//! Report service
//!
//! Administrators generate, annotate, export, and delete reports; managers
//! may read the reports of their own salon.

use axtreso_core::entities::{NewReportExport, Report};
use axtreso_core::{DateRange, DomainError, ExportFormat, Role, TransactionFilter};
use serde_json::json;
use tracing::{info, instrument};

use crate::dto::{
    ExportReportRequest, GenerateReportRequest, ReportExportResponse, ReportResponse,
    UpdateReportNotesRequest,
};

use super::access::{authorize_salon, salon_for, Actor, SalonAccess};
use super::audit;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// A stored artifact ready to be sent to the client
#[derive(Debug, Clone)]
pub struct ExportDownload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportDownload {
    /// Rendered artifacts are plain text whatever their nominal format
    pub const CONTENT_TYPE: &'static str = "text/plain; charset=utf-8";
}

/// Download name of an export, e.g. `rapport-12-2025-03-31.pdf`
pub fn export_file_name(report_id: i64, format: ExportFormat, date: chrono::NaiveDate) -> String {
    format!("rapport-{report_id}-{date}.{}", format.extension())
}

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Snapshot a salon's figures over a date range
    #[instrument(skip(self, request), fields(salon_id = request.salon_id))]
    pub async fn generate(
        &self,
        actor: Actor,
        request: GenerateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        let period = DateRange::new(request.start_date, request.end_date)?;
        let salon = salon_for(self.ctx, actor, SalonAccess::Administer, request.salon_id).await?;

        let (from, to) = period.utc_bounds(salon.city.timezone());
        let transactions = self
            .ctx
            .transaction_repo()
            .list_by_salon(salon.id, &TransactionFilter::between(from, to))
            .await?;

        let draft = self
            .ctx
            .report_generator()
            .generate(&salon, period, &transactions, actor.user_id)
            .await?;
        let report = self.ctx.report_repo().create(&draft).await?;

        info!(report_id = report.id, salon_id = salon.id, "Report generated");
        audit::record(
            self.ctx,
            actor,
            Some(salon.id),
            "report_generated",
            json!({
                "report_id": report.id,
                "start_date": period.start(),
                "end_date": period.end(),
                "transactions": transactions.len(),
            }),
        )
        .await;

        Ok(ReportResponse::from(report))
    }

    /// Reports of a salon, newest first
    #[instrument(skip(self))]
    pub async fn get_reports_by_salon(
        &self,
        actor: Actor,
        salon_id: i64,
    ) -> ServiceResult<Vec<ReportResponse>> {
        let salon = salon_for(self.ctx, actor, SalonAccess::Read, salon_id).await?;

        let reports = self.ctx.report_repo().list_by_salon(salon.id).await?;
        Ok(reports.into_iter().map(ReportResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_report_by_id(&self, actor: Actor, report_id: i64) -> ServiceResult<ReportResponse> {
        let report = self.readable_report(actor, report_id).await?;
        Ok(ReportResponse::from(report))
    }

    /// Replace the administrator-written advice and comments
    #[instrument(skip(self, request))]
    pub async fn update_notes(
        &self,
        actor: Actor,
        report_id: i64,
        request: UpdateReportNotesRequest,
    ) -> ServiceResult<ReportResponse> {
        let mut report = self.admin_report(actor, report_id).await?;

        if let Some(advice) = request.personalized_advice {
            report.narrative.personalized_advice = Some(advice).filter(|a| !a.trim().is_empty());
        }
        if let Some(comments) = request.admin_comments {
            report.narrative.admin_comments = Some(comments).filter(|c| !c.trim().is_empty());
        }

        self.ctx
            .report_repo()
            .update_notes(report.id, &report.narrative)
            .await?;

        audit::record(
            self.ctx,
            actor,
            Some(report.salon_id),
            "report_notes_updated",
            json!({ "report_id": report.id }),
        )
        .await;

        // Re-read for the stored updated_at
        let report = self
            .ctx
            .report_repo()
            .find_by_id(report.id)
            .await?
            .unwrap_or(report);
        Ok(ReportResponse::from(report))
    }

    /// Delete a report together with its exports
    #[instrument(skip(self))]
    pub async fn delete_report(&self, actor: Actor, report_id: i64) -> ServiceResult<()> {
        let report = self.admin_report(actor, report_id).await?;

        self.ctx.report_repo().delete(report.id).await?;

        info!(report_id, "Report deleted");
        audit::record(
            self.ctx,
            actor,
            Some(report.salon_id),
            "report_deleted",
            json!({
                "report_id": report.id,
                "start_date": report.period.start(),
                "end_date": report.period.end(),
            }),
        )
        .await;

        Ok(())
    }

    /// Render a report and record the produced artifact
    #[instrument(skip(self, request), fields(format = %request.format))]
    pub async fn export(
        &self,
        actor: Actor,
        report_id: i64,
        request: ExportReportRequest,
    ) -> ServiceResult<ReportExportResponse> {
        let report = self.admin_report(actor, report_id).await?;
        let salon = self
            .ctx
            .salon_repo()
            .find_by_id(report.salon_id)
            .await?
            .ok_or(DomainError::SalonNotFound(report.salon_id))?;

        let artifact = self
            .ctx
            .report_exporter()
            .export(&report, &salon, request.format)
            .await?;

        let export = self
            .ctx
            .export_repo()
            .create(&NewReportExport {
                report_id: report.id,
                format: request.format,
                file_key: artifact.file_key,
                file_url: artifact.file_url,
            })
            .await?;

        info!(report_id, export_id = export.id, "Report exported");
        audit::record(
            self.ctx,
            actor,
            Some(report.salon_id),
            "report_exported",
            json!({ "report_id": report.id, "export_id": export.id, "format": export.format }),
        )
        .await;

        Ok(ReportExportResponse::from(export))
    }

    /// Exports of a report, newest first
    #[instrument(skip(self))]
    pub async fn list_exports(
        &self,
        actor: Actor,
        report_id: i64,
    ) -> ServiceResult<Vec<ReportExportResponse>> {
        let report = self.admin_report(actor, report_id).await?;

        let exports = self.ctx.export_repo().list_by_report(report.id).await?;
        Ok(exports.into_iter().map(ReportExportResponse::from).collect())
    }

    /// Fetch the bytes of a stored export
    #[instrument(skip(self))]
    pub async fn download_export(&self, actor: Actor, export_id: i64) -> ServiceResult<ExportDownload> {
        actor.require_admin()?;

        let export = self
            .ctx
            .export_repo()
            .find_by_id(export_id)
            .await?
            .ok_or(DomainError::ExportNotFound(export_id))?;

        let bytes = self.ctx.report_exporter().fetch(&export.file_key).await?;

        Ok(ExportDownload {
            file_name: export_file_name(
                export.report_id,
                export.format,
                export.created_at.date_naive(),
            ),
            content_type: ExportDownload::CONTENT_TYPE,
            bytes,
        })
    }

    /// Load a report for an administrator
    async fn admin_report(&self, actor: Actor, report_id: i64) -> ServiceResult<Report> {
        actor.require_admin()?;

        let report = self
            .ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .ok_or(DomainError::ReportNotFound(report_id))?;
        Ok(report)
    }

    /// Load a report for an administrator or the manager of its salon
    ///
    /// A manager asking for a missing report gets the same answer as for a
    /// report of another salon.
    async fn readable_report(&self, actor: Actor, report_id: i64) -> ServiceResult<Report> {
        match actor.role {
            Role::Admin => self.admin_report(actor, report_id).await,
            Role::Manager => {
                let report = self
                    .ctx
                    .report_repo()
                    .find_by_id(report_id)
                    .await?
                    .ok_or(DomainError::NotSalonOwner)?;
                let salon = self.ctx.salon_repo().find_by_id(report.salon_id).await?;
                authorize_salon(actor, SalonAccess::Read, report.salon_id, salon.as_ref())?;
                Ok(report)
            }
            Role::User => Err(DomainError::ManagerRequired.into()),
        }
    }
}
