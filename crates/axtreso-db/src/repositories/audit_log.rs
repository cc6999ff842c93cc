//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use tracing::instrument;

use axtreso_core::entities::{AuditLog, NewAuditLog};
use axtreso_core::traits::{AuditLogRepository, RepoResult};

use crate::models::AuditLogModel;
use crate::store::Database;

use super::error::{map_db_error, recover_read};

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    db: Database,
}

impl PgAuditLogRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, entry), fields(action = %entry.action))]
    async fn create(&self, entry: &NewAuditLog) -> RepoResult<()> {
        let pool = self.db.writer()?;

        sqlx::query(
            r"
            INSERT INTO audit_logs (user_id, salon_id, action, details)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(entry.user_id)
        .bind(entry.salon_id)
        .bind(&entry.action)
        .bind(&entry.details)
        .execute(pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_salon(&self, salon_id: i64, limit: i64) -> RepoResult<Vec<AuditLog>> {
        let Some(pool) = self.db.reader() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, user_id, salon_id, action, details, created_at
            FROM audit_logs
            WHERE salon_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(salon_id)
        .bind(limit)
        .fetch_all(pool)
        .await;

        Ok(recover_read(rows, "audit_logs.list_by_salon")?
            .into_iter()
            .map(AuditLog::from)
            .collect())
    }
}
