//! Service context - dependency container for services
//!
//! Holds the repositories, the session and identity token services, and the
//! reporting collaborators.

use std::sync::Arc;

use axtreso_common::auth::{IdentityTokens, PasswordService, SessionTokens};
use axtreso_core::traits::{
    AuditLogRepository, HealthProbe, NotificationSettingsRepository, ReportExportRepository,
    ReportExporter, ReportGenerator, ReportRepository, SalonRepository, TransactionRepository,
    UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    salon_repo: Arc<dyn SalonRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    report_repo: Arc<dyn ReportRepository>,
    export_repo: Arc<dyn ReportExportRepository>,
    notification_repo: Arc<dyn NotificationSettingsRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
    health_probe: Arc<dyn HealthProbe>,

    // Reporting collaborators
    report_generator: Arc<dyn ReportGenerator>,
    report_exporter: Arc<dyn ReportExporter>,

    // Auth
    session_tokens: Arc<SessionTokens>,
    identity_tokens: Option<Arc<IdentityTokens>>,
    password_service: PasswordService,
    owner_open_id: Option<String>,
}

impl ServiceContext {
    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the salon repository
    pub fn salon_repo(&self) -> &dyn SalonRepository {
        self.salon_repo.as_ref()
    }

    /// Get the transaction repository
    pub fn transaction_repo(&self) -> &dyn TransactionRepository {
        self.transaction_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the report export repository
    pub fn export_repo(&self) -> &dyn ReportExportRepository {
        self.export_repo.as_ref()
    }

    /// Get the notification settings repository
    pub fn notification_repo(&self) -> &dyn NotificationSettingsRepository {
        self.notification_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    /// Get the store readiness probe
    pub fn health_probe(&self) -> &dyn HealthProbe {
        self.health_probe.as_ref()
    }

    // === Reporting ===

    pub fn report_generator(&self) -> &dyn ReportGenerator {
        self.report_generator.as_ref()
    }

    pub fn report_exporter(&self) -> &dyn ReportExporter {
        self.report_exporter.as_ref()
    }

    // === Auth ===

    /// Get the session token service
    pub fn session_tokens(&self) -> &SessionTokens {
        self.session_tokens.as_ref()
    }

    /// Identity token verifier, `None` when external sign-in is not configured
    pub fn identity_tokens(&self) -> Option<&IdentityTokens> {
        self.identity_tokens.as_deref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// External identity promoted to administrator
    pub fn owner_open_id(&self) -> Option<&str> {
        self.owner_open_id.as_deref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("reporting", &"...")
            .field("external_login", &self.identity_tokens.is_some())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    salon_repo: Option<Arc<dyn SalonRepository>>,
    transaction_repo: Option<Arc<dyn TransactionRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    export_repo: Option<Arc<dyn ReportExportRepository>>,
    notification_repo: Option<Arc<dyn NotificationSettingsRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    health_probe: Option<Arc<dyn HealthProbe>>,
    report_generator: Option<Arc<dyn ReportGenerator>>,
    report_exporter: Option<Arc<dyn ReportExporter>>,
    session_tokens: Option<Arc<SessionTokens>>,
    identity_tokens: Option<Arc<IdentityTokens>>,
    owner_open_id: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn salon_repo(mut self, repo: Arc<dyn SalonRepository>) -> Self {
        self.salon_repo = Some(repo);
        self
    }

    pub fn transaction_repo(mut self, repo: Arc<dyn TransactionRepository>) -> Self {
        self.transaction_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn export_repo(mut self, repo: Arc<dyn ReportExportRepository>) -> Self {
        self.export_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationSettingsRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn health_probe(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.health_probe = Some(probe);
        self
    }

    pub fn report_generator(mut self, generator: Arc<dyn ReportGenerator>) -> Self {
        self.report_generator = Some(generator);
        self
    }

    pub fn report_exporter(mut self, exporter: Arc<dyn ReportExporter>) -> Self {
        self.report_exporter = Some(exporter);
        self
    }

    pub fn session_tokens(mut self, tokens: Arc<SessionTokens>) -> Self {
        self.session_tokens = Some(tokens);
        self
    }

    /// Enable external sign-in
    pub fn identity_tokens(mut self, tokens: Arc<IdentityTokens>) -> Self {
        self.identity_tokens = Some(tokens);
        self
    }

    pub fn owner_open_id(mut self, open_id: impl Into<String>) -> Self {
        self.owner_open_id = Some(open_id.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns an error if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            salon_repo: self.salon_repo.ok_or_else(|| missing("salon_repo"))?,
            transaction_repo: self
                .transaction_repo
                .ok_or_else(|| missing("transaction_repo"))?,
            report_repo: self.report_repo.ok_or_else(|| missing("report_repo"))?,
            export_repo: self.export_repo.ok_or_else(|| missing("export_repo"))?,
            notification_repo: self
                .notification_repo
                .ok_or_else(|| missing("notification_repo"))?,
            audit_repo: self.audit_repo.ok_or_else(|| missing("audit_repo"))?,
            health_probe: self.health_probe.ok_or_else(|| missing("health_probe"))?,
            report_generator: self
                .report_generator
                .ok_or_else(|| missing("report_generator"))?,
            report_exporter: self
                .report_exporter
                .ok_or_else(|| missing("report_exporter"))?,
            session_tokens: self.session_tokens.ok_or_else(|| missing("session_tokens"))?,
            identity_tokens: self.identity_tokens,
            password_service: PasswordService::new(),
            owner_open_id: self.owner_open_id,
        })
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::internal(format!("{dependency} is required"))
}
