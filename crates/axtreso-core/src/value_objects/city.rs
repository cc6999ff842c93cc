//! Supported salon cities

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// City a salon operates in
///
/// Each city carries the timezone used to assign transactions to calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Libreville,
    Brazzaville,
}

impl City {
    pub const ALL: [City; 2] = [City::Libreville, City::Brazzaville];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Libreville => "Libreville",
            Self::Brazzaville => "Brazzaville",
        }
    }

    /// Local timezone for day bucketing
    #[must_use]
    pub fn timezone(self) -> Tz {
        match self {
            Self::Libreville => chrono_tz::Africa::Libreville,
            Self::Brazzaville => chrono_tz::Africa::Brazzaville,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| DomainError::ValidationError(format!("Unsupported city: {s}")))
    }
}
