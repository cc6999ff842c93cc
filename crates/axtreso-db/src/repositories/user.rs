//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;

use axtreso_core::entities::{NewUser, User};
use axtreso_core::error::DomainError;
use axtreso_core::traits::{RepoResult, UserRepository};

use crate::mappers::CredentialColumns;
use crate::models::UserModel;
use crate::store::Database;

use super::error::{map_db_error, map_unique_violation, recover_read};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    db: Database,
}

impl PgUserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let Some(pool) = self.db.reader() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, name, role, login_method, open_id, password_hash,
                   last_signed_in, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await;

        recover_read(row, "users.find_by_id")?
            .map(User::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let Some(pool) = self.db.reader() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, name, role, login_method, open_id, password_hash,
                   last_signed_in, created_at, updated_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            ",
        )
        .bind(email)
        .fetch_optional(pool)
        .await;

        recover_read(row, "users.find_by_email")?
            .map(User::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let Some(pool) = self.db.reader() else {
            return Ok(false);
        };

        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))
            ",
        )
        .bind(email)
        .fetch_one(pool)
        .await;

        recover_read(exists, "users.email_exists")
    }

    #[instrument(skip(self, user), fields(role = %user.role))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let pool = self.db.writer()?;
        let credential = CredentialColumns::new(&user.credential);

        let row = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, name, role, login_method, open_id, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, name, role, login_method, open_id, password_hash,
                      last_signed_in, created_at, updated_at
            ",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(credential.login_method)
        .bind(credential.open_id)
        .bind(credential.password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        User::try_from(row)
    }

    #[instrument(skip(self, user))]
    async fn upsert_external(&self, user: &NewUser) -> RepoResult<User> {
        let pool = self.db.writer()?;
        let Some(open_id) = user.credential.open_id() else {
            return Err(DomainError::ValidationError(
                "External sign-in requires an identity".to_string(),
            ));
        };

        // Promotion to admin sticks; a later sign-in never demotes
        let row = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (email, name, role, login_method, open_id, last_signed_in)
            VALUES ($1, $2, $3, 'external', $4, NOW())
            ON CONFLICT (open_id) DO UPDATE SET
                email = COALESCE(EXCLUDED.email, users.email),
                name = COALESCE(EXCLUDED.name, users.name),
                role = CASE WHEN EXCLUDED.role = 'admin' THEN 'admin' ELSE users.role END,
                last_signed_in = NOW(),
                updated_at = NOW()
            RETURNING id, email, name, role, login_method, open_id, password_hash,
                      last_signed_in, created_at, updated_at
            ",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(open_id)
        .fetch_one(pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        User::try_from(row)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let pool = self.db.writer()?;

        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1 AND login_method = 'password'
            ",
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn touch_last_signed_in(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()> {
        let pool = self.db.writer()?;

        sqlx::query("UPDATE users SET last_signed_in = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
