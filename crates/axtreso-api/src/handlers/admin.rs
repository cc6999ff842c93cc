//! Administrator handlers

use axtreso_service::dto::AdminOverviewResponse;
use axtreso_service::DashboardService;
use axum::{extract::State, Json};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Totals of every salon over the trailing period
///
/// GET /admin/overview
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AdminOverviewResponse>> {
    let service = DashboardService::new(state.service_context());
    let response = service.admin_overview(auth.actor()).await?;
    Ok(Json(response))
}
