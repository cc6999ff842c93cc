//! Shared store handle
//!
//! The service keeps answering when PostgreSQL is missing or unreachable:
//! repositories ask the handle for a pool and treat a missing one as "no
//! rows" on reads and as [`DomainError::StoreUnavailable`] on writes.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use axtreso_core::error::DomainError;
use axtreso_core::traits::{HealthProbe, RepoResult};

use crate::migrations;
use crate::pool::{create_pool, lazy_pool, PoolConfig};

/// Handle to the optional PostgreSQL pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: Option<PgPool>,
}

impl Database {
    /// Connect and migrate, degrading instead of failing
    ///
    /// An unreachable server still yields a lazily connecting pool so the
    /// store comes back once PostgreSQL does. Only a malformed URL leaves
    /// the handle without a pool.
    pub async fn connect(config: &PoolConfig) -> Self {
        match create_pool(config).await {
            Ok(pool) => {
                match migrations::run(&pool).await {
                    Ok(0) => {}
                    Ok(applied) => info!(applied, "Database schema migrated"),
                    Err(e) => warn!(error = %e, "Failed to apply migrations"),
                }
                Self { pool: Some(pool) }
            }
            Err(e) => {
                warn!(error = %e, "Database unreachable, continuing in degraded mode");
                match lazy_pool(config) {
                    Ok(pool) => Self { pool: Some(pool) },
                    Err(e) => {
                        warn!(error = %e, "Invalid database URL, running without a store");
                        Self::unavailable()
                    }
                }
            }
        }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// A handle with no store behind it
    pub fn unavailable() -> Self {
        Self { pool: None }
    }

    pub fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    /// Pool for reads; `None` means every read comes back empty
    pub fn reader(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Pool for writes
    pub fn writer(&self) -> RepoResult<&PgPool> {
        self.pool.as_ref().ok_or(DomainError::StoreUnavailable)
    }

    /// Round-trip a trivial query
    pub async fn ping(&self) -> bool {
        match &self.pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => false,
        }
    }
}

#[async_trait]
impl HealthProbe for Database {
    async fn is_ready(&self) -> bool {
        self.ping().await
    }
}
