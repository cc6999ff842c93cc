//! Salon database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for salons table
#[derive(Debug, Clone, FromRow)]
pub struct SalonModel {
    pub id: i64,
    pub manager_id: i64,
    pub name: String,
    pub city: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
