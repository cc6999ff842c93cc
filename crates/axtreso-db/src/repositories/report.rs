//! PostgreSQL implementations of ReportRepository and ReportExportRepository

use async_trait::async_trait;
use sqlx::types::Json;
use tracing::instrument;

use axtreso_core::entities::{NewReportExport, Report, ReportDraft, ReportExport, ReportNarrative};
use axtreso_core::error::DomainError;
use axtreso_core::traits::{RepoResult, ReportExportRepository, ReportRepository};

use crate::models::{ReportExportModel, ReportModel};
use crate::store::Database;

use super::error::{map_db_error, map_foreign_key_violation, recover_read};

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    db: Database,
}

impl PgReportRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Report>> {
        let Some(pool) = self.db.reader() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, salon_id, generated_by, period_start, period_end,
                   total_encaissements, total_decaissements, net_balance,
                   encaissements_breakdown, decaissements_breakdown, momentum,
                   encaissements_interpretation, decaissements_interpretation,
                   momentum_interpretation, personalized_advice, admin_comments,
                   created_at, updated_at
            FROM reports
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await;

        recover_read(row, "reports.find_by_id")?
            .map(Report::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_salon(&self, salon_id: i64) -> RepoResult<Vec<Report>> {
        let Some(pool) = self.db.reader() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, salon_id, generated_by, period_start, period_end,
                   total_encaissements, total_decaissements, net_balance,
                   encaissements_breakdown, decaissements_breakdown, momentum,
                   encaissements_interpretation, decaissements_interpretation,
                   momentum_interpretation, personalized_advice, admin_comments,
                   created_at, updated_at
            FROM reports
            WHERE salon_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(salon_id)
        .fetch_all(pool)
        .await;

        recover_read(rows, "reports.list_by_salon")?
            .into_iter()
            .map(Report::try_from)
            .collect()
    }

    #[instrument(skip(self, draft), fields(salon_id = draft.salon_id))]
    async fn create(&self, draft: &ReportDraft) -> RepoResult<Report> {
        let pool = self.db.writer()?;

        let row = sqlx::query_as::<_, ReportModel>(
            r"
            INSERT INTO reports (
                salon_id, generated_by, period_start, period_end,
                total_encaissements, total_decaissements, net_balance,
                encaissements_breakdown, decaissements_breakdown, momentum,
                encaissements_interpretation, decaissements_interpretation,
                momentum_interpretation, personalized_advice, admin_comments
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id, salon_id, generated_by, period_start, period_end,
                      total_encaissements, total_decaissements, net_balance,
                      encaissements_breakdown, decaissements_breakdown, momentum,
                      encaissements_interpretation, decaissements_interpretation,
                      momentum_interpretation, personalized_advice, admin_comments,
                      created_at, updated_at
            ",
        )
        .bind(draft.salon_id)
        .bind(draft.generated_by)
        .bind(draft.period.start())
        .bind(draft.period.end())
        .bind(draft.totals.total_in)
        .bind(draft.totals.total_out)
        .bind(draft.totals.net_balance)
        .bind(Json(&draft.encaissements_breakdown))
        .bind(Json(&draft.decaissements_breakdown))
        .bind(Json(&draft.momentum))
        .bind(&draft.narrative.encaissements_interpretation)
        .bind(&draft.narrative.decaissements_interpretation)
        .bind(&draft.narrative.momentum_interpretation)
        .bind(&draft.narrative.personalized_advice)
        .bind(&draft.narrative.admin_comments)
        .fetch_one(pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::SalonNotFound(draft.salon_id)))?;

        Report::try_from(row)
    }

    #[instrument(skip(self, narrative))]
    async fn update_notes(&self, id: i64, narrative: &ReportNarrative) -> RepoResult<()> {
        let pool = self.db.writer()?;

        // Figures and generated interpretations stay frozen
        let result = sqlx::query(
            r"
            UPDATE reports
            SET personalized_advice = $2, admin_comments = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(&narrative.personalized_advice)
        .bind(&narrative.admin_comments)
        .execute(pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReportNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let pool = self.db.writer()?;

        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReportNotFound(id));
        }

        Ok(())
    }
}

/// PostgreSQL implementation of ReportExportRepository
#[derive(Clone)]
pub struct PgReportExportRepository {
    db: Database,
}

impl PgReportExportRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportExportRepository for PgReportExportRepository {
    #[instrument(skip(self, export), fields(report_id = export.report_id, format = %export.format))]
    async fn create(&self, export: &NewReportExport) -> RepoResult<ReportExport> {
        let pool = self.db.writer()?;

        let row = sqlx::query_as::<_, ReportExportModel>(
            r"
            INSERT INTO report_exports (report_id, format, file_key, file_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, report_id, format, file_key, file_url, created_at
            ",
        )
        .bind(export.report_id)
        .bind(export.format.as_str())
        .bind(&export.file_key)
        .bind(&export.file_url)
        .fetch_one(pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::ReportNotFound(export.report_id)))?;

        ReportExport::try_from(row)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ReportExport>> {
        let Some(pool) = self.db.reader() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ReportExportModel>(
            r"
            SELECT id, report_id, format, file_key, file_url, created_at
            FROM report_exports
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await;

        recover_read(row, "report_exports.find_by_id")?
            .map(ReportExport::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_report(&self, report_id: i64) -> RepoResult<Vec<ReportExport>> {
        let Some(pool) = self.db.reader() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, ReportExportModel>(
            r"
            SELECT id, report_id, format, file_key, file_url, created_at
            FROM report_exports
            WHERE report_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(report_id)
        .fetch_all(pool)
        .await;

        recover_read(rows, "report_exports.list_by_report")?
            .into_iter()
            .map(ReportExport::try_from)
            .collect()
    }
}
