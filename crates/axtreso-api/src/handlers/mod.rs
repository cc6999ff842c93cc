//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod notifications;
pub mod reports;
pub mod salons;
pub mod transactions;
