//! PostgreSQL implementation of SalonRepository

use async_trait::async_trait;
use tracing::instrument;

use axtreso_core::entities::{NewSalon, Salon, SalonStatus};
use axtreso_core::error::DomainError;
use axtreso_core::traits::{RepoResult, SalonRepository};

use crate::models::SalonModel;
use crate::store::Database;

use super::error::{map_db_error, map_foreign_key_violation, recover_read};

/// PostgreSQL implementation of SalonRepository
#[derive(Clone)]
pub struct PgSalonRepository {
    db: Database,
}

impl PgSalonRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn into_salons(rows: Vec<SalonModel>) -> RepoResult<Vec<Salon>> {
    rows.into_iter().map(Salon::try_from).collect()
}

#[async_trait]
impl SalonRepository for PgSalonRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Salon>> {
        let Some(pool) = self.db.reader() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, SalonModel>(
            r"
            SELECT id, manager_id, name, city, email, phone, status, created_at, updated_at
            FROM salons
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await;

        recover_read(row, "salons.find_by_id")?
            .map(Salon::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_manager(&self, manager_id: i64) -> RepoResult<Vec<Salon>> {
        let Some(pool) = self.db.reader() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, SalonModel>(
            r"
            SELECT id, manager_id, name, city, email, phone, status, created_at, updated_at
            FROM salons
            WHERE manager_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(manager_id)
        .fetch_all(pool)
        .await;

        into_salons(recover_read(rows, "salons.find_by_manager")?)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Salon>> {
        let Some(pool) = self.db.reader() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, SalonModel>(
            r"
            SELECT id, manager_id, name, city, email, phone, status, created_at, updated_at
            FROM salons
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(pool)
        .await;

        into_salons(recover_read(rows, "salons.list_all")?)
    }

    #[instrument(skip(self, salon), fields(manager_id = salon.manager_id))]
    async fn create(&self, salon: &NewSalon) -> RepoResult<Salon> {
        let pool = self.db.writer()?;

        let row = sqlx::query_as::<_, SalonModel>(
            r"
            INSERT INTO salons (manager_id, name, city, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, manager_id, name, city, email, phone, status, created_at, updated_at
            ",
        )
        .bind(salon.manager_id)
        .bind(&salon.name)
        .bind(salon.city.as_str())
        .bind(&salon.email)
        .bind(&salon.phone)
        .fetch_one(pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(salon.manager_id)))?;

        Salon::try_from(row)
    }

    #[instrument(skip(self, salon), fields(salon_id = salon.id))]
    async fn update(&self, salon: &Salon) -> RepoResult<()> {
        let pool = self.db.writer()?;

        let result = sqlx::query(
            r"
            UPDATE salons
            SET name = $2, city = $3, email = $4, phone = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(salon.id)
        .bind(&salon.name)
        .bind(salon.city.as_str())
        .bind(&salon.email)
        .bind(&salon.phone)
        .execute(pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SalonNotFound(salon.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: SalonStatus) -> RepoResult<()> {
        let pool = self.db.writer()?;

        let result = sqlx::query(
            r"
            UPDATE salons
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SalonNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let pool = self.db.writer()?;

        // Transactions, reports, exports and settings cascade
        let result = sqlx::query("DELETE FROM salons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SalonNotFound(id));
        }

        Ok(())
    }
}
