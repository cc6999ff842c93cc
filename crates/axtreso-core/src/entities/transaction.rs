//! Transaction entity - a single cash movement of a salon

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Direction of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Cash in
    Encaissement,
    /// Cash out
    Decaissement,
}

impl TransactionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Encaissement => "encaissement",
            Self::Decaissement => "decaissement",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encaissement" => Ok(Self::Encaissement),
            "decaissement" => Ok(Self::Decaissement),
            other => Err(DomainError::ValidationError(format!(
                "Unknown transaction type: {other}"
            ))),
        }
    }
}

/// Transaction entity
///
/// `date` is when the movement happened; `created_at` is when it was recorded.
/// The type never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub salon_id: i64,
    pub transaction_type: TransactionType,
    pub designation: String,
    pub amount: Decimal,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount with its sign applied (cash out is negative)
    pub fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Encaissement => self.amount,
            TransactionType::Decaissement => -self.amount,
        }
    }
}

/// Values needed to record a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub salon_id: i64,
    pub transaction_type: TransactionType,
    pub designation: String,
    pub amount: Decimal,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
}

impl NewTransaction {
    /// Check the invariants the store relies on
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.amount <= Decimal::ZERO {
            return Err(DomainError::NonPositiveAmount);
        }
        let len = self.designation.trim().chars().count();
        if !(2..=255).contains(&len) {
            return Err(DomainError::ValidationError(
                "Designation must be 2-255 characters".to_string(),
            ));
        }
        Ok(())
    }
}
