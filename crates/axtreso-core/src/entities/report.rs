//! Report entities - point-in-time financial summaries and their exports

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::Totals;
use crate::error::DomainError;
use crate::value_objects::DateRange;

/// Day with the highest total for one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakDay {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Activity metadata over a report period
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Momentum {
    pub encaissements_peak: Option<PeakDay>,
    pub decaissements_peak: Option<PeakDay>,
    /// Days with at least one transaction
    pub active_days: u32,
    /// Weekday with the highest encaissements total
    pub busiest_weekday: Option<Weekday>,
}

/// Free-text analysis attached to a report
///
/// The interpretations are produced by the report generator; advice and
/// comments are written by an administrator after generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportNarrative {
    pub encaissements_interpretation: Option<String>,
    pub decaissements_interpretation: Option<String>,
    pub momentum_interpretation: Option<String>,
    pub personalized_advice: Option<String>,
    pub admin_comments: Option<String>,
}

/// Report contents before they are persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub salon_id: i64,
    pub generated_by: i64,
    pub period: DateRange,
    pub totals: Totals,
    pub encaissements_breakdown: BTreeMap<String, Decimal>,
    pub decaissements_breakdown: BTreeMap<String, Decimal>,
    pub momentum: Momentum,
    pub narrative: ReportNarrative,
}

/// Report entity
///
/// Figures are frozen at generation time and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub salon_id: i64,
    pub generated_by: i64,
    pub period: DateRange,
    pub totals: Totals,
    pub encaissements_breakdown: BTreeMap<String, Decimal>,
    pub decaissements_breakdown: BTreeMap<String, Decimal>,
    pub momentum: Momentum,
    pub narrative: ReportNarrative,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Persisted report built from a draft
    pub fn from_draft(id: i64, draft: ReportDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            salon_id: draft.salon_id,
            generated_by: draft.generated_by,
            period: draft.period,
            totals: draft.totals,
            encaissements_breakdown: draft.encaissements_breakdown,
            decaissements_breakdown: draft.decaissements_breakdown,
            momentum: draft.momentum,
            narrative: draft.narrative,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Downloadable rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Excel,
    Word,
}

impl ExportFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
            Self::Word => "word",
        }
    }

    /// File extension of the artifact
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "xlsx",
            Self::Word => "docx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(Self::Pdf),
            "excel" => Ok(Self::Excel),
            "word" => Ok(Self::Word),
            other => Err(DomainError::ValidationError(format!(
                "Unknown export format: {other}"
            ))),
        }
    }
}

/// A report rendered to a stored artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportExport {
    pub id: i64,
    pub report_id: i64,
    pub format: ExportFormat,
    pub file_key: String,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
}

/// Values needed to record an export
#[derive(Debug, Clone)]
pub struct NewReportExport {
    pub report_id: i64,
    pub format: ExportFormat,
    pub file_key: String,
    pub file_url: String,
}
