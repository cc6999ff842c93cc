//! Report and report export database models

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::FromRow;

use axtreso_core::entities::Momentum;

/// Database model for reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub salon_id: i64,
    pub generated_by: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_encaissements: Decimal,
    pub total_decaissements: Decimal,
    pub net_balance: Decimal,
    pub encaissements_breakdown: Json<BTreeMap<String, Decimal>>,
    pub decaissements_breakdown: Json<BTreeMap<String, Decimal>>,
    pub momentum: Json<Momentum>,
    pub encaissements_interpretation: Option<String>,
    pub decaissements_interpretation: Option<String>,
    pub momentum_interpretation: Option<String>,
    pub personalized_advice: Option<String>,
    pub admin_comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for report_exports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportExportModel {
    pub id: i64,
    pub report_id: i64,
    pub format: String,
    pub file_key: String,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
}
