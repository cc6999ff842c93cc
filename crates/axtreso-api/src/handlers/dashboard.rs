//! Dashboard handlers

use axtreso_service::dto::{DashboardQuery, SalonDashboardResponse};
use axtreso_service::DashboardService;
use axum::{extract::State, Json};

use crate::extractors::{ApiQuery, AuthUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Today, month-to-date, and the daily trend of a salon
///
/// GET /dashboard/salons/{salon_id}?days=
pub async fn salon_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
    ApiQuery(query): ApiQuery<DashboardQuery>,
) -> ApiResult<Json<SalonDashboardResponse>> {
    let service = DashboardService::new(state.service_context());
    let response = service
        .salon_dashboard(auth.actor(), salon_id, query)
        .await?;
    Ok(Json(response))
}
