//! Report generation and export collaborators
//!
//! Authorization and aggregation never depend on how a report is written or
//! rendered; engines that produce narratives or real documents plug in here.

use async_trait::async_trait;

use crate::entities::{ExportFormat, Report, ReportDraft, Salon, Transaction};
use crate::value_objects::DateRange;

use super::RepoResult;

/// Builds report contents for a salon over a period
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// `transactions` are the salon's transactions within `period`
    async fn generate(
        &self,
        salon: &Salon,
        period: DateRange,
        transactions: &[Transaction],
        generated_by: i64,
    ) -> RepoResult<ReportDraft>;
}

/// Location of a rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Storage key used to fetch the artifact back
    pub file_key: String,
    /// Locator handed to clients
    pub file_url: String,
}

/// Renders a report to a downloadable artifact
#[async_trait]
pub trait ReportExporter: Send + Sync {
    async fn export(
        &self,
        report: &Report,
        salon: &Salon,
        format: ExportFormat,
    ) -> RepoResult<ExportArtifact>;

    /// Read a previously exported artifact
    async fn fetch(&self, file_key: &str) -> RepoResult<Vec<u8>>;
}
