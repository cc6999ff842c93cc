//! Error handling utilities for repositories

use axtreso_core::error::DomainError;
use axtreso_core::traits::RepoResult;
use sqlx::Error as SqlxError;
use tracing::warn;

/// The server could not be reached, as opposed to a query failing
pub fn is_connection_error(e: &SqlxError) -> bool {
    matches!(
        e,
        SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::WorkerCrashed
    )
}

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    if is_connection_error(&e) {
        warn!(error = %e, "Database unreachable during write");
        return DomainError::StoreUnavailable;
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for a foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing();
        }
    }
    map_db_error(e)
}

/// Resolve a read result, answering "nothing" when the store is unreachable
pub fn recover_read<T: Default>(result: Result<T, SqlxError>, operation: &'static str) -> RepoResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if is_connection_error(&e) => {
            warn!(operation, error = %e, "Database unreachable, returning empty result");
            Ok(T::default())
        }
        Err(e) => Err(DomainError::DatabaseError(e.to_string())),
    }
}

/// Escape `%`, `_`, and `\` for use inside an ILIKE pattern
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
