//! # axtreso-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! It handles:
//!
//! - Connection pool management and degraded operation without a store
//! - Embedded schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axtreso_db::{Database, PoolConfig, PgSalonRepository};
//! use axtreso_core::traits::SalonRepository;
//!
//! async fn example() {
//!     let db = Database::connect(&PoolConfig::new("postgres://localhost/axtreso")).await;
//!     let salons = PgSalonRepository::new(db);
//!     let all = salons.list_all().await;
//! }
//! ```

pub mod mappers;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod store;

// Re-export commonly used types
pub use pool::{create_pool, lazy_pool, PgPool, PoolConfig};
pub use repositories::{
    PgAuditLogRepository, PgNotificationSettingsRepository, PgReportExportRepository,
    PgReportRepository, PgSalonRepository, PgTransactionRepository, PgUserRepository,
};
pub use store::Database;
