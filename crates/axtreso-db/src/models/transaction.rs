//! Transaction database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for transactions table
#[derive(Debug, Clone, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub salon_id: i64,
    pub transaction_type: String,
    pub designation: String,
    /// NUMERIC(14, 2)
    pub amount: Decimal,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
