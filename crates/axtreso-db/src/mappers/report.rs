//! Report entity <-> model mappers

use axtreso_core::analytics::Totals;
use axtreso_core::entities::{Report, ReportExport, ReportNarrative};
use axtreso_core::error::DomainError;
use axtreso_core::value_objects::DateRange;

use crate::models::{ReportExportModel, ReportModel};

use super::corrupt_column;

impl TryFrom<ReportModel> for Report {
    type Error = DomainError;

    fn try_from(model: ReportModel) -> Result<Self, Self::Error> {
        let period = DateRange::new(model.period_start, model.period_end)
            .map_err(|e| corrupt_column("reports", "period", e))?;

        Ok(Report {
            id: model.id,
            salon_id: model.salon_id,
            generated_by: model.generated_by,
            period,
            // Stored as generated, never recomputed
            totals: Totals {
                total_in: model.total_encaissements,
                total_out: model.total_decaissements,
                net_balance: model.net_balance,
            },
            encaissements_breakdown: model.encaissements_breakdown.0,
            decaissements_breakdown: model.decaissements_breakdown.0,
            momentum: model.momentum.0,
            narrative: ReportNarrative {
                encaissements_interpretation: model.encaissements_interpretation,
                decaissements_interpretation: model.decaissements_interpretation,
                momentum_interpretation: model.momentum_interpretation,
                personalized_advice: model.personalized_advice,
                admin_comments: model.admin_comments,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<ReportExportModel> for ReportExport {
    type Error = DomainError;

    fn try_from(model: ReportExportModel) -> Result<Self, Self::Error> {
        Ok(ReportExport {
            id: model.id,
            report_id: model.report_id,
            format: model
                .format
                .parse()
                .map_err(|e| corrupt_column("report_exports", "format", e))?,
            file_key: model.file_key,
            file_url: model.file_url,
            created_at: model.created_at,
        })
    }
}
