//! Salon handlers
//!
//! Endpoints for salon management.

use axtreso_service::dto::{
    AuditLogQuery, AuditLogResponse, ReportResponse, ResetSalonPasswordRequest, SalonResponse,
    UpdateSalonRequest,
};
use axtreso_service::{ReportService, SalonService};
use axum::{extract::State, Json};

use crate::extractors::{ApiQuery, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// First salon of the signed-in manager, or `null`
///
/// GET /salons/me
pub async fn get_my_salon(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Option<SalonResponse>>> {
    let service = SalonService::new(state.service_context());
    let response = service.get_my_salon(auth.actor()).await?;
    Ok(Json(response))
}

/// GET /salons
pub async fn get_all_salons(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SalonResponse>>> {
    let service = SalonService::new(state.service_context());
    let response = service.get_all_salons(auth.actor()).await?;
    Ok(Json(response))
}

/// GET /salons/{salon_id}
pub async fn get_salon(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
) -> ApiResult<Json<SalonResponse>> {
    let service = SalonService::new(state.service_context());
    let response = service.get_salon_by_id(auth.actor(), salon_id).await?;
    Ok(Json(response))
}

/// Edit the profile of the manager's own salon
///
/// PATCH /salons/{salon_id}
pub async fn update_salon(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateSalonRequest>,
) -> ApiResult<Json<SalonResponse>> {
    let service = SalonService::new(state.service_context());
    let response = service.update_salon(auth.actor(), salon_id, request).await?;
    Ok(Json(response))
}

/// DELETE /salons/{salon_id}
pub async fn delete_salon(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
) -> ApiResult<NoContent> {
    let service = SalonService::new(state.service_context());
    service.delete_salon(auth.actor(), salon_id).await?;
    Ok(NoContent)
}

/// Flip a salon between active and inactive
///
/// POST /salons/{salon_id}/status/toggle
pub async fn toggle_salon_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
) -> ApiResult<Json<SalonResponse>> {
    let service = SalonService::new(state.service_context());
    let response = service.toggle_salon_status(auth.actor(), salon_id).await?;
    Ok(Json(response))
}

/// Set a new password for the salon's manager
///
/// POST /salons/{salon_id}/password/reset
pub async fn reset_salon_password(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<ResetSalonPasswordRequest>,
) -> ApiResult<NoContent> {
    let service = SalonService::new(state.service_context());
    service
        .reset_salon_password(auth.actor(), salon_id, request)
        .await?;
    Ok(NoContent)
}

/// GET /salons/{salon_id}/audit-logs?limit=
pub async fn get_audit_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
    ApiQuery(query): ApiQuery<AuditLogQuery>,
) -> ApiResult<Json<Vec<AuditLogResponse>>> {
    let service = SalonService::new(state.service_context());
    let response = service
        .get_audit_logs(auth.actor(), salon_id, query.limit)
        .await?;
    Ok(Json(response))
}

/// Reports of a salon, newest first
///
/// GET /salons/{salon_id}/reports
pub async fn get_salon_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
) -> ApiResult<Json<Vec<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.get_reports_by_salon(auth.actor(), salon_id).await?;
    Ok(Json(response))
}
