//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axtreso_common::{AppConfig, AppError, IdentityTokens, SessionTokens};
use axtreso_db::{
    Database, PgAuditLogRepository, PgNotificationSettingsRepository, PgReportExportRepository,
    PgReportRepository, PgSalonRepository, PgTransactionRepository, PgUserRepository, PoolConfig,
};
use axtreso_service::{
    FileReportExporter, ServiceContext, ServiceContextBuilder, SummaryReportGenerator,
};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes skip rate limiting so orchestrators can always reach them.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Open the store handle; never fails, degraded when unreachable
async fn connect_store(config: &AppConfig) -> Database {
    match &config.database {
        Some(db) => {
            info!("Connecting to PostgreSQL...");
            let database = Database::connect(&PoolConfig::from(db)).await;
            info!(configured = database.is_configured(), "Store handle ready");
            database
        }
        None => {
            warn!("DATABASE_URL not set, running in degraded mode");
            Database::unavailable()
        }
    }
}

/// Wire repositories, report collaborators, and tokens around a store
pub fn build_service_context(
    database: Database,
    config: &AppConfig,
) -> Result<ServiceContext, AppError> {
    let mut builder = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(database.clone())))
        .salon_repo(Arc::new(PgSalonRepository::new(database.clone())))
        .transaction_repo(Arc::new(PgTransactionRepository::new(database.clone())))
        .report_repo(Arc::new(PgReportRepository::new(database.clone())))
        .export_repo(Arc::new(PgReportExportRepository::new(database.clone())))
        .notification_repo(Arc::new(PgNotificationSettingsRepository::new(database.clone())))
        .audit_repo(Arc::new(PgAuditLogRepository::new(database.clone())))
        .health_probe(Arc::new(database))
        .report_generator(Arc::new(SummaryReportGenerator::new()))
        .report_exporter(Arc::new(FileReportExporter::new(&config.storage.dir)))
        .session_tokens(Arc::new(SessionTokens::new(
            &config.session.secret,
            config.session.ttl_seconds,
        )));

    if let Some(secret) = &config.identity.provider_secret {
        builder = builder.identity_tokens(Arc::new(IdentityTokens::new(secret)));
    }
    if let Some(open_id) = &config.identity.owner_open_id {
        builder = builder.owner_open_id(open_id.clone());
    }

    builder.build().map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let database = connect_store(&config).await;
    let service_context = build_service_context(database, &config)?;
    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl+C
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {}", e)))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
