//! Application errors

mod app_error;

pub use app_error::{condition_for_status, domain_status, AppError, AppResult};
