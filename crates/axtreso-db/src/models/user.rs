//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: String,
    pub login_method: String,
    pub open_id: Option<String>,
    pub password_hash: Option<String>,
    pub last_signed_in: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
