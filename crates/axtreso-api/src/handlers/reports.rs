//! Report handlers
//!
//! Generation, notes, exports, and downloads are administrator operations;
//! reading a report is also open to the manager of its salon.

use axtreso_service::dto::{
    ExportReportRequest, GenerateReportRequest, ReportExportResponse, ReportResponse,
    UpdateReportNotesRequest,
};
use axtreso_service::ReportService;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// POST /reports
pub async fn generate_report(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<GenerateReportRequest>,
) -> ApiResult<Created<Json<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.generate(auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// GET /reports/{report_id}
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(report_id): IdPath<i64>,
) -> ApiResult<Json<ReportResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.get_report_by_id(auth.actor(), report_id).await?;
    Ok(Json(response))
}

/// Replace the advice and comments of a report
///
/// PATCH /reports/{report_id}/notes
pub async fn update_notes(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(report_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateReportNotesRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service
        .update_notes(auth.actor(), report_id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /reports/{report_id}
pub async fn delete_report(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(report_id): IdPath<i64>,
) -> ApiResult<NoContent> {
    let service = ReportService::new(state.service_context());
    service.delete_report(auth.actor(), report_id).await?;
    Ok(NoContent)
}

/// Render a report in the requested format
///
/// POST /reports/{report_id}/exports
pub async fn export_report(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(report_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<ExportReportRequest>,
) -> ApiResult<Created<Json<ReportExportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.export(auth.actor(), report_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /reports/{report_id}/exports
pub async fn list_exports(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(report_id): IdPath<i64>,
) -> ApiResult<Json<Vec<ReportExportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.list_exports(auth.actor(), report_id).await?;
    Ok(Json(response))
}

/// Stored export as an attachment
///
/// GET /exports/{export_id}/download
pub async fn download_export(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(export_id): IdPath<i64>,
) -> ApiResult<Response> {
    let service = ReportService::new(state.service_context());
    let download = service.download_export(auth.actor(), export_id).await?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        download.file_name
    ))
    .map_err(ApiError::internal)?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(download.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.bytes,
    )
        .into_response())
}
