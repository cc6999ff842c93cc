//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{
    admin, auth, dashboard, health, notifications, reports, salons, transactions,
};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .nest("/api", rest_alias_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(salon_routes())
        .merge(transaction_routes())
        .merge(report_routes())
        .merge(dashboard_routes())
        .merge(admin_routes())
}

/// Plain REST paths kept for manager clients
fn rest_alias_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/manager/register", post(auth::register_manager))
        .route("/auth/manager/login", post(auth::login_manager))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(auth::me))
        .route("/auth/manager/register", post(auth::register_manager))
        .route("/auth/manager/login", post(auth::login_manager))
        .route("/auth/external/login", post(auth::login_external))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/password", post(auth::change_password))
}

/// Salon routes
fn salon_routes() -> Router<AppState> {
    Router::new()
        .route("/salons", get(salons::get_all_salons))
        .route("/salons/me", get(salons::get_my_salon))
        .route(
            "/salons/:salon_id",
            get(salons::get_salon)
                .patch(salons::update_salon)
                .delete(salons::delete_salon),
        )
        .route("/salons/:salon_id/status/toggle", post(salons::toggle_salon_status))
        .route("/salons/:salon_id/password/reset", post(salons::reset_salon_password))
        .route("/salons/:salon_id/audit-logs", get(salons::get_audit_logs))
        .route("/salons/:salon_id/reports", get(salons::get_salon_reports))
        .route(
            "/salons/:salon_id/notifications",
            get(notifications::get_settings).put(notifications::update_settings),
        )
}

/// Transaction routes, nested under their salon
fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/salons/:salon_id/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/salons/:salon_id/transactions/:transaction_id",
            get(transactions::get_transaction)
                .patch(transactions::update_transaction)
                .delete(transactions::delete_transaction),
        )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", post(reports::generate_report))
        .route(
            "/reports/:report_id",
            get(reports::get_report).delete(reports::delete_report),
        )
        .route("/reports/:report_id/notes", patch(reports::update_notes))
        .route(
            "/reports/:report_id/exports",
            get(reports::list_exports).post(reports::export_report),
        )
        .route("/exports/:export_id/download", get(reports::download_export))
}

fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/salons/:salon_id", get(dashboard::salon_dashboard))
}

fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/overview", get(admin::overview))
}
