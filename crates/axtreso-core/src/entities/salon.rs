//! Salon entity - the tenant unit

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::City;

/// Whether a salon is currently operating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SalonStatus {
    #[default]
    Active,
    Inactive,
}

impl SalonStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for SalonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalonStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(DomainError::ValidationError(format!(
                "Unknown salon status: {other}"
            ))),
        }
    }
}

/// Salon entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salon {
    pub id: i64,
    pub manager_id: i64,
    pub name: String,
    pub city: City,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: SalonStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Salon {
    /// Check whether the given user manages this salon
    #[inline]
    pub fn is_managed_by(&self, user_id: i64) -> bool {
        self.manager_id == user_id
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == SalonStatus::Active
    }
}

/// Values needed to create a salon
#[derive(Debug, Clone)]
pub struct NewSalon {
    pub manager_id: i64,
    pub name: String,
    pub city: City,
    pub email: Option<String>,
    pub phone: Option<String>,
}
