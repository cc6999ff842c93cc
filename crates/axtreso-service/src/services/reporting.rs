//! Default report collaborators
//!
//! [`SummaryReportGenerator`] fills in the figures of a report and leaves the
//! written interpretations empty. [`FileReportExporter`] stores a plain-text
//! rendering of a report under a local directory.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use axtreso_core::analytics::local_day;
use axtreso_core::entities::{ExportFormat, Report, ReportDraft, ReportNarrative, Salon, Transaction};
use axtreso_core::traits::{ExportArtifact, RepoResult, ReportExporter, ReportGenerator};
use axtreso_core::{breakdown, momentum, top_n, totals, DateRange, DomainError, TransactionType};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Décaissement designations kept in a report breakdown
pub const DECAISSEMENTS_TOP_N: usize = 10;

/// Computes totals, breakdowns, and momentum for a period
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryReportGenerator;

impl SummaryReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportGenerator for SummaryReportGenerator {
    #[instrument(skip(self, salon, transactions), fields(salon_id = salon.id, count = transactions.len()))]
    async fn generate(
        &self,
        salon: &Salon,
        period: DateRange,
        transactions: &[Transaction],
        generated_by: i64,
    ) -> RepoResult<ReportDraft> {
        let tz = salon.city.timezone();
        let in_period: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| tx.salon_id == salon.id && period.contains(local_day(tx, tz)))
            .cloned()
            .collect();

        let decaissements = breakdown(&in_period, TransactionType::Decaissement);

        Ok(ReportDraft {
            salon_id: salon.id,
            generated_by,
            period,
            totals: totals(&in_period),
            encaissements_breakdown: breakdown(&in_period, TransactionType::Encaissement),
            decaissements_breakdown: top_n(&decaissements, DECAISSEMENTS_TOP_N),
            momentum: momentum(&in_period, tz),
            narrative: ReportNarrative::default(),
        })
    }
}

/// Writes report renderings below a root directory
///
/// Artifacts live at `reports/<report id>/<uuid>.<ext>` relative to the root;
/// that relative path is the file key.
#[derive(Debug, Clone)]
pub struct FileReportExporter {
    root: PathBuf,
}

impl FileReportExporter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, file_key: &str) -> RepoResult<PathBuf> {
        let key = Path::new(file_key);
        let plain = !file_key.is_empty() && key.components().all(|c| matches!(c, Component::Normal(_)));
        if !plain {
            return Err(DomainError::StorageError(format!("Invalid file key: {file_key}")));
        }
        Ok(self.root.join(key))
    }
}

fn storage_error(err: std::io::Error) -> DomainError {
    DomainError::StorageError(err.to_string())
}

#[async_trait]
impl ReportExporter for FileReportExporter {
    #[instrument(skip(self, report, salon), fields(report_id = report.id))]
    async fn export(
        &self,
        report: &Report,
        salon: &Salon,
        format: ExportFormat,
    ) -> RepoResult<ExportArtifact> {
        let file_key = format!(
            "reports/{}/{}.{}",
            report.id,
            Uuid::new_v4(),
            format.extension()
        );
        let path = self.resolve(&file_key)?;

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(storage_error)?;
        }
        tokio::fs::write(&path, render_plain_text(report, salon, format))
            .await
            .map_err(storage_error)?;

        debug!(path = %path.display(), "Report artifact written");
        Ok(ExportArtifact {
            file_url: format!("file://{}", path.display()),
            file_key,
        })
    }

    async fn fetch(&self, file_key: &str) -> RepoResult<Vec<u8>> {
        let path = self.resolve(file_key)?;
        tokio::fs::read(&path).await.map_err(storage_error)
    }
}

/// Human-readable rendering of a report
pub fn render_plain_text(report: &Report, salon: &Salon, format: ExportFormat) -> String {
    let mut lines = vec![
        format!("AXTRESO - Rapport financier ({format})"),
        format!("Salon : {} ({})", salon.name, salon.city),
        format!(
            "Période : du {} au {}",
            report.period.start(),
            report.period.end()
        ),
        String::new(),
        format!("Total encaissements : {}", report.totals.total_in),
        format!("Total décaissements : {}", report.totals.total_out),
        format!("Solde final : {}", report.totals.net_balance),
        String::new(),
        "Encaissements par désignation".to_string(),
    ];
    lines.extend(
        report
            .encaissements_breakdown
            .iter()
            .map(|(designation, amount)| format!("  - {designation} : {amount}")),
    );

    lines.push(String::new());
    lines.push("Principaux décaissements".to_string());
    lines.extend(
        report
            .decaissements_breakdown
            .iter()
            .map(|(designation, amount)| format!("  - {designation} : {amount}")),
    );

    lines.push(String::new());
    lines.push(format!("Jours actifs : {}", report.momentum.active_days));
    if let Some(peak) = report.momentum.encaissements_peak {
        lines.push(format!("Meilleur jour : {} ({})", peak.date, peak.amount));
    }
    if let Some(peak) = report.momentum.decaissements_peak {
        lines.push(format!("Plus forte dépense : {} ({})", peak.date, peak.amount));
    }
    if let Some(weekday) = report.momentum.busiest_weekday {
        lines.push(format!("Jour le plus actif : {weekday}"));
    }

    let narrative = &report.narrative;
    for (title, text) in [
        ("Analyse des encaissements", &narrative.encaissements_interpretation),
        ("Analyse des décaissements", &narrative.decaissements_interpretation),
        ("Dynamique", &narrative.momentum_interpretation),
        ("Conseils personnalisés", &narrative.personalized_advice),
        ("Commentaires", &narrative.admin_comments),
    ] {
        if let Some(text) = text.as_deref().filter(|t| !t.trim().is_empty()) {
            lines.push(String::new());
            lines.push(title.to_string());
            lines.push(text.to_string());
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
