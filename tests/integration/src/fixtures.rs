//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::helpers::{assert_json, Session, TestServer, OWNER_OPEN_ID};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Manager registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub salon_name: String,
    pub city: String,
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("gerante{suffix}@example.com"),
            password: "MotDePasse123".to_string(),
            name: Some(format!("Gérante {suffix}")),
            salon_name: format!("Salon {suffix}"),
            city: "Libreville".to_string(),
            phone: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: Option<String>,
    pub role: String,
    pub login_method: String,
}

#[derive(Debug, Deserialize)]
pub struct SalonResponse {
    pub id: i64,
    pub manager_id: i64,
    pub name: String,
    pub city: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub salon: Option<SalonResponse>,
}

/// Transaction creation request
#[derive(Debug, Serialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub designation: String,
    pub amount: String,
    pub comment: Option<String>,
    pub date: Option<String>,
}

impl CreateTransactionRequest {
    pub fn encaissement(designation: &str, amount: &str) -> Self {
        Self {
            transaction_type: "encaissement".to_string(),
            designation: designation.to_string(),
            amount: amount.to_string(),
            comment: None,
            date: None,
        }
    }

    pub fn decaissement(designation: &str, amount: &str) -> Self {
        Self {
            transaction_type: "decaissement".to_string(),
            ..Self::encaissement(designation, amount)
        }
    }

    /// Pin the transaction to an RFC 3339 instant
    pub fn on(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub salon_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub designation: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct TotalsResponse {
    pub total_in: Decimal,
    pub total_out: Decimal,
    pub net_balance: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub encaissements: f64,
    pub decaissements: f64,
}

#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub today: String,
    pub today_totals: TotalsResponse,
    pub month_totals: TotalsResponse,
    pub trend: Vec<ChartPoint>,
}

#[derive(Debug, Deserialize)]
pub struct ReportResponse {
    pub id: i64,
    pub salon_id: i64,
    pub totals: TotalsResponse,
    pub personalized_advice: Option<String>,
    pub admin_comments: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReportExportResponse {
    pub id: i64,
    pub report_id: i64,
    pub format: String,
    pub file_key: String,
}

/// A registered manager with their session and salon
pub struct Manager {
    pub request: RegisterRequest,
    pub session: Session,
    pub user_id: i64,
    pub salon_id: i64,
}

/// Register a fresh manager and keep the issued session
pub async fn register_manager(server: &TestServer) -> Result<Manager> {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/manager/register", None, &request)
        .await?;
    let session = server
        .session_from(&response)
        .ok_or_else(|| anyhow::anyhow!("registration did not set a session cookie"))?;
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await?;
    let salon = auth
        .salon
        .ok_or_else(|| anyhow::anyhow!("registration did not return a salon"))?;

    Ok(Manager {
        request,
        session,
        user_id: auth.user.id,
        salon_id: salon.id,
    })
}

/// Sign in as the owner identity, who becomes administrator
pub async fn sign_in_admin(server: &TestServer) -> Result<Session> {
    sign_in_external(server, OWNER_OPEN_ID, "Propriétaire").await
}

/// Sign in through the identity provider
pub async fn sign_in_external(server: &TestServer, open_id: &str, name: &str) -> Result<Session> {
    let token = server.identity_token(open_id, name)?;
    let response = server
        .post(
            "/api/v1/auth/external/login",
            None,
            &serde_json::json!({ "identity_token": token }),
        )
        .await?;
    let session = server
        .session_from(&response)
        .ok_or_else(|| anyhow::anyhow!("external login did not set a session cookie"))?;
    assert_json::<AuthResponse>(response, StatusCode::OK).await?;
    Ok(session)
}

/// Record a transaction and return it
pub async fn create_transaction(
    server: &TestServer,
    manager: &Manager,
    request: &CreateTransactionRequest,
) -> Result<TransactionResponse> {
    let response = server
        .post(
            &format!("/api/v1/salons/{}/transactions", manager.salon_id),
            Some(&manager.session),
            request,
        )
        .await?;
    assert_json(response, StatusCode::CREATED).await
}
