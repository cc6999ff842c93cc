//! Model to entity mappers
//!
//! Rows store enums as text, so conversions are fallible: a value outside
//! the CHECK constraints surfaces as [`DomainError::DatabaseError`].
//!
//! [`DomainError::DatabaseError`]: axtreso_core::DomainError::DatabaseError

mod audit_log;
mod notification;
mod report;
mod salon;
mod transaction;
mod user;

pub use user::CredentialColumns;

use axtreso_core::DomainError;

fn corrupt_column(table: &str, column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::DatabaseError(format!("Unreadable {table}.{column}: {err}"))
}
