//! PostgreSQL implementation of TransactionRepository

use async_trait::async_trait;
use tracing::instrument;

use axtreso_core::entities::{NewTransaction, Transaction};
use axtreso_core::error::DomainError;
use axtreso_core::traits::{RepoResult, TransactionFilter, TransactionRepository};

use crate::models::TransactionModel;
use crate::store::Database;

use super::error::{escape_like, map_db_error, map_foreign_key_violation, recover_read};

/// PostgreSQL implementation of TransactionRepository
#[derive(Clone)]
pub struct PgTransactionRepository {
    db: Database,
}

impl PgTransactionRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Transaction>> {
        let Some(pool) = self.db.reader() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, TransactionModel>(
            r"
            SELECT id, salon_id, transaction_type, designation, amount, comment, date,
                   created_at, updated_at
            FROM transactions
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await;

        recover_read(row, "transactions.find_by_id")?
            .map(Transaction::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_in_salon(&self, salon_id: i64, id: i64) -> RepoResult<Option<Transaction>> {
        let Some(pool) = self.db.reader() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, TransactionModel>(
            r"
            SELECT id, salon_id, transaction_type, designation, amount, comment, date,
                   created_at, updated_at
            FROM transactions
            WHERE id = $1 AND salon_id = $2
            ",
        )
        .bind(id)
        .bind(salon_id)
        .fetch_optional(pool)
        .await;

        recover_read(row, "transactions.find_in_salon")?
            .map(Transaction::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_salon(
        &self,
        salon_id: i64,
        filter: &TransactionFilter,
    ) -> RepoResult<Vec<Transaction>> {
        let Some(pool) = self.db.reader() else {
            return Ok(Vec::new());
        };

        // Unset filters bind NULL and drop out of the WHERE clause
        let rows = sqlx::query_as::<_, TransactionModel>(
            r"
            SELECT id, salon_id, transaction_type, designation, amount, comment, date,
                   created_at, updated_at
            FROM transactions
            WHERE salon_id = $1
              AND ($2::timestamptz IS NULL OR date >= $2)
              AND ($3::timestamptz IS NULL OR date <= $3)
              AND ($4::text IS NULL OR transaction_type = $4)
              AND ($5::text IS NULL OR designation = $5)
              AND ($6::text IS NULL OR designation ILIKE '%' || $6 || '%' ESCAPE '\')
            ORDER BY date DESC, id DESC
            ",
        )
        .bind(salon_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.transaction_type.map(|t| t.as_str()))
        .bind(filter.designation.as_deref())
        .bind(filter.search.as_deref().map(escape_like))
        .fetch_all(pool)
        .await;

        recover_read(rows, "transactions.list_by_salon")?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    #[instrument(skip(self, transaction), fields(salon_id = transaction.salon_id))]
    async fn create(&self, transaction: &NewTransaction) -> RepoResult<Transaction> {
        let pool = self.db.writer()?;

        let row = sqlx::query_as::<_, TransactionModel>(
            r"
            INSERT INTO transactions (salon_id, transaction_type, designation, amount, comment, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, salon_id, transaction_type, designation, amount, comment, date,
                      created_at, updated_at
            ",
        )
        .bind(transaction.salon_id)
        .bind(transaction.transaction_type.as_str())
        .bind(&transaction.designation)
        .bind(transaction.amount)
        .bind(&transaction.comment)
        .bind(transaction.date)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::SalonNotFound(transaction.salon_id))
        })?;

        Transaction::try_from(row)
    }

    #[instrument(skip(self, transaction), fields(transaction_id = transaction.id))]
    async fn update(&self, transaction: &Transaction) -> RepoResult<()> {
        let pool = self.db.writer()?;

        let result = sqlx::query(
            r"
            UPDATE transactions
            SET designation = $2, amount = $3, comment = $4, date = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(transaction.id)
        .bind(&transaction.designation)
        .bind(transaction.amount)
        .bind(&transaction.comment)
        .bind(transaction.date)
        .execute(pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TransactionNotFound(transaction.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let pool = self.db.writer()?;

        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TransactionNotFound(id));
        }

        Ok(())
    }
}
