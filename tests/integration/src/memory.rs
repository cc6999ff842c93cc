//! In-memory store
//!
//! Implements every repository port over plain maps so the API can be driven
//! end to end without PostgreSQL. Flipping [`MemoryStore::set_degraded`]
//! makes it behave like an unreachable database: reads come back empty and
//! writes fail with [`DomainError::StoreUnavailable`].

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axtreso_core::entities::{
    AuditLog, Credential, NewAuditLog, NewReportExport, NewSalon, NewTransaction, NewUser,
    NotificationSettings, Report, ReportDraft, ReportExport, ReportNarrative, Salon,
    SalonStatus, Transaction, User,
};
use axtreso_core::traits::{
    AuditLogRepository, HealthProbe, NotificationSettingsRepository, RepoResult,
    ReportExportRepository, ReportRepository, SalonRepository, TransactionFilter,
    TransactionRepository, UserRepository,
};
use axtreso_core::{DomainError, Role};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: BTreeMap<i64, User>,
    salons: BTreeMap<i64, Salon>,
    transactions: BTreeMap<i64, Transaction>,
    reports: BTreeMap<i64, Report>,
    exports: BTreeMap<i64, ReportExport>,
    notifications: BTreeMap<i64, NotificationSettings>,
    audit_logs: Vec<AuditLog>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn email_taken(&self, email: &str) -> bool {
        self.users
            .values()
            .any(|u| u.email.as_deref().is_some_and(|e| e.eq_ignore_ascii_case(email)))
    }

    fn delete_report(&mut self, id: i64) {
        self.reports.remove(&id);
        self.exports.retain(|_, export| export.report_id != id);
    }
}

/// Shared in-memory backing for all repositories
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    degraded: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing (or regaining) the database
    pub fn set_degraded(&self, degraded: bool) {
        self.degraded.store(degraded, Ordering::SeqCst);
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }

    /// Number of stored users whose email matches
    pub fn count_users_with_email(&self, email: &str) -> usize {
        self.tables
            .lock()
            .users
            .values()
            .filter(|u| u.email.as_deref().is_some_and(|e| e.eq_ignore_ascii_case(email)))
            .count()
    }

    /// Every audit action recorded for a salon, oldest first
    pub fn audit_actions(&self, salon_id: i64) -> Vec<String> {
        self.tables
            .lock()
            .audit_logs
            .iter()
            .filter(|entry| entry.salon_id == Some(salon_id))
            .map(|entry| entry.action.clone())
            .collect()
    }

    /// Every audit entry, oldest first
    pub fn all_audit_logs(&self) -> Vec<AuditLog> {
        self.tables.lock().audit_logs.clone()
    }

    fn read<T>(&self, empty: T, f: impl FnOnce(&Tables) -> T) -> RepoResult<T> {
        if self.is_degraded() {
            return Ok(empty);
        }
        Ok(f(&self.tables.lock()))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Tables) -> RepoResult<T>) -> RepoResult<T> {
        if self.is_degraded() {
            return Err(DomainError::StoreUnavailable);
        }
        f(&mut self.tables.lock())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        self.read(None, |t| t.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.read(None, |t| {
            t.users
                .values()
                .find(|u| u.email.as_deref().is_some_and(|e| e.eq_ignore_ascii_case(email)))
                .cloned()
        })
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        self.read(false, |t| t.email_taken(email))
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        self.write(|t| {
            if user.email.as_deref().is_some_and(|e| t.email_taken(e)) {
                return Err(DomainError::EmailAlreadyExists);
            }
            let now = Utc::now();
            let created = User {
                id: t.next_id(),
                email: user.email.clone(),
                name: user.name.clone(),
                role: user.role,
                credential: user.credential.clone(),
                last_signed_in: now,
                created_at: now,
                updated_at: now,
            };
            t.users.insert(created.id, created.clone());
            Ok(created)
        })
    }

    async fn upsert_external(&self, user: &NewUser) -> RepoResult<User> {
        self.write(|t| {
            let now = Utc::now();
            let open_id = user.credential.open_id();
            let existing = t
                .users
                .values_mut()
                .find(|u| open_id.is_some() && u.credential.open_id() == open_id);

            if let Some(stored) = existing {
                if user.email.is_some() {
                    stored.email.clone_from(&user.email);
                }
                if user.name.is_some() {
                    stored.name.clone_from(&user.name);
                }
                if user.role == Role::Admin {
                    stored.role = Role::Admin;
                }
                stored.last_signed_in = now;
                stored.updated_at = now;
                return Ok(stored.clone());
            }

            let created = User {
                id: t.next_id(),
                email: user.email.clone(),
                name: user.name.clone(),
                role: user.role,
                credential: user.credential.clone(),
                last_signed_in: now,
                created_at: now,
                updated_at: now,
            };
            t.users.insert(created.id, created.clone());
            Ok(created)
        })
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        self.write(|t| {
            let user = t.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
            match &mut user.credential {
                Credential::Password { password_hash: hash } => {
                    *hash = password_hash.to_string();
                    user.updated_at = Utc::now();
                    Ok(())
                }
                Credential::External { .. } => Err(DomainError::PasswordLoginUnavailable),
            }
        })
    }

    async fn touch_last_signed_in(&self, id: i64, at: DateTime<Utc>) -> RepoResult<()> {
        self.write(|t| {
            let user = t.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
            user.last_signed_in = at;
            Ok(())
        })
    }
}

#[async_trait]
impl SalonRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Salon>> {
        self.read(None, |t| t.salons.get(&id).cloned())
    }

    async fn find_by_manager(&self, manager_id: i64) -> RepoResult<Vec<Salon>> {
        self.read(Vec::new(), |t| {
            t.salons
                .values()
                .filter(|s| s.manager_id == manager_id)
                .cloned()
                .collect()
        })
    }

    async fn list_all(&self) -> RepoResult<Vec<Salon>> {
        self.read(Vec::new(), |t| t.salons.values().rev().cloned().collect())
    }

    async fn create(&self, salon: &NewSalon) -> RepoResult<Salon> {
        self.write(|t| {
            let now = Utc::now();
            let created = Salon {
                id: t.next_id(),
                manager_id: salon.manager_id,
                name: salon.name.clone(),
                city: salon.city,
                email: salon.email.clone(),
                phone: salon.phone.clone(),
                status: SalonStatus::Active,
                created_at: now,
                updated_at: now,
            };
            t.salons.insert(created.id, created.clone());
            Ok(created)
        })
    }

    async fn update(&self, salon: &Salon) -> RepoResult<()> {
        self.write(|t| {
            let stored = t
                .salons
                .get_mut(&salon.id)
                .ok_or(DomainError::SalonNotFound(salon.id))?;
            stored.name.clone_from(&salon.name);
            stored.city = salon.city;
            stored.email.clone_from(&salon.email);
            stored.phone.clone_from(&salon.phone);
            stored.updated_at = Utc::now();
            Ok(())
        })
    }

    async fn update_status(&self, id: i64, status: SalonStatus) -> RepoResult<()> {
        self.write(|t| {
            let stored = t.salons.get_mut(&id).ok_or(DomainError::SalonNotFound(id))?;
            stored.status = status;
            stored.updated_at = Utc::now();
            Ok(())
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.write(|t| {
            t.salons.remove(&id).ok_or(DomainError::SalonNotFound(id))?;
            t.transactions.retain(|_, tx| tx.salon_id != id);
            t.notifications.remove(&id);
            let report_ids: Vec<i64> = t
                .reports
                .values()
                .filter(|r| r.salon_id == id)
                .map(|r| r.id)
                .collect();
            for report_id in report_ids {
                t.delete_report(report_id);
            }
            Ok(())
        })
    }
}

#[async_trait]
impl TransactionRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Transaction>> {
        self.read(None, |t| t.transactions.get(&id).cloned())
    }

    async fn find_in_salon(&self, salon_id: i64, id: i64) -> RepoResult<Option<Transaction>> {
        self.read(None, |t| {
            t.transactions
                .get(&id)
                .filter(|tx| tx.salon_id == salon_id)
                .cloned()
        })
    }

    async fn list_by_salon(
        &self,
        salon_id: i64,
        filter: &TransactionFilter,
    ) -> RepoResult<Vec<Transaction>> {
        self.read(Vec::new(), |t| {
            let mut txs: Vec<Transaction> = t
                .transactions
                .values()
                .filter(|tx| tx.salon_id == salon_id && filter.matches(tx))
                .cloned()
                .collect();
            txs.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
            txs
        })
    }

    async fn create(&self, transaction: &NewTransaction) -> RepoResult<Transaction> {
        self.write(|t| {
            if !t.salons.contains_key(&transaction.salon_id) {
                return Err(DomainError::SalonNotFound(transaction.salon_id));
            }
            let now = Utc::now();
            let created = Transaction {
                id: t.next_id(),
                salon_id: transaction.salon_id,
                transaction_type: transaction.transaction_type,
                designation: transaction.designation.clone(),
                amount: transaction.amount,
                comment: transaction.comment.clone(),
                date: transaction.date,
                created_at: now,
                updated_at: now,
            };
            t.transactions.insert(created.id, created.clone());
            Ok(created)
        })
    }

    async fn update(&self, transaction: &Transaction) -> RepoResult<()> {
        self.write(|t| {
            let stored = t
                .transactions
                .get_mut(&transaction.id)
                .ok_or(DomainError::TransactionNotFound(transaction.id))?;
            stored.designation.clone_from(&transaction.designation);
            stored.amount = transaction.amount;
            stored.comment.clone_from(&transaction.comment);
            stored.date = transaction.date;
            stored.updated_at = Utc::now();
            Ok(())
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.write(|t| {
            t.transactions
                .remove(&id)
                .map(|_| ())
                .ok_or(DomainError::TransactionNotFound(id))
        })
    }
}

#[async_trait]
impl ReportRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Report>> {
        self.read(None, |t| t.reports.get(&id).cloned())
    }

    async fn list_by_salon(&self, salon_id: i64) -> RepoResult<Vec<Report>> {
        self.read(Vec::new(), |t| {
            t.reports
                .values()
                .rev()
                .filter(|r| r.salon_id == salon_id)
                .cloned()
                .collect()
        })
    }

    async fn create(&self, draft: &ReportDraft) -> RepoResult<Report> {
        self.write(|t| {
            let report = Report::from_draft(t.next_id(), draft.clone(), Utc::now());
            t.reports.insert(report.id, report.clone());
            Ok(report)
        })
    }

    async fn update_notes(&self, id: i64, narrative: &ReportNarrative) -> RepoResult<()> {
        self.write(|t| {
            let report = t.reports.get_mut(&id).ok_or(DomainError::ReportNotFound(id))?;
            report.narrative = narrative.clone();
            report.updated_at = Utc::now();
            Ok(())
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.write(|t| {
            if !t.reports.contains_key(&id) {
                return Err(DomainError::ReportNotFound(id));
            }
            t.delete_report(id);
            Ok(())
        })
    }
}

#[async_trait]
impl ReportExportRepository for MemoryStore {
    async fn create(&self, export: &NewReportExport) -> RepoResult<ReportExport> {
        self.write(|t| {
            let created = ReportExport {
                id: t.next_id(),
                report_id: export.report_id,
                format: export.format,
                file_key: export.file_key.clone(),
                file_url: export.file_url.clone(),
                created_at: Utc::now(),
            };
            t.exports.insert(created.id, created.clone());
            Ok(created)
        })
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ReportExport>> {
        self.read(None, |t| t.exports.get(&id).cloned())
    }

    async fn list_by_report(&self, report_id: i64) -> RepoResult<Vec<ReportExport>> {
        self.read(Vec::new(), |t| {
            t.exports
                .values()
                .rev()
                .filter(|e| e.report_id == report_id)
                .cloned()
                .collect()
        })
    }
}

#[async_trait]
impl NotificationSettingsRepository for MemoryStore {
    async fn find_by_salon(&self, salon_id: i64) -> RepoResult<Option<NotificationSettings>> {
        self.read(None, |t| t.notifications.get(&salon_id).cloned())
    }

    async fn upsert(&self, settings: &NotificationSettings) -> RepoResult<NotificationSettings> {
        self.write(|t| {
            let now = Utc::now();
            let stored = t
                .notifications
                .entry(settings.salon_id)
                .or_insert_with(|| NotificationSettings {
                    created_at: now,
                    ..settings.clone()
                });
            stored.daily_reminder = settings.daily_reminder;
            stored.inactivity_alert = settings.inactivity_alert;
            stored.report_notification = settings.report_notification;
            stored.updated_at = now;
            Ok(stored.clone())
        })
    }
}

#[async_trait]
impl AuditLogRepository for MemoryStore {
    async fn create(&self, entry: &NewAuditLog) -> RepoResult<()> {
        self.write(|t| {
            let id = t.next_id();
            t.audit_logs.push(AuditLog {
                id,
                user_id: entry.user_id,
                salon_id: entry.salon_id,
                action: entry.action.clone(),
                details: entry.details.clone(),
                created_at: Utc::now(),
            });
            Ok(())
        })
    }

    async fn list_by_salon(&self, salon_id: i64, limit: i64) -> RepoResult<Vec<AuditLog>> {
        self.read(Vec::new(), |t| {
            t.audit_logs
                .iter()
                .rev()
                .filter(|entry| entry.salon_id == Some(salon_id))
                .take(usize::try_from(limit).unwrap_or(0))
                .cloned()
                .collect()
        })
    }
}

#[async_trait]
impl HealthProbe for MemoryStore {
    async fn is_ready(&self) -> bool {
        !self.is_degraded()
    }
}
