//! Notification settings handlers

use axtreso_service::dto::{NotificationSettingsResponse, UpdateNotificationSettingsRequest};
use axtreso_service::NotificationService;
use axum::{extract::State, Json};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /salons/{salon_id}/notifications
pub async fn get_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
) -> ApiResult<Json<NotificationSettingsResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.get_settings(auth.actor(), salon_id).await?;
    Ok(Json(response))
}

/// PUT /salons/{salon_id}/notifications
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateNotificationSettingsRequest>,
) -> ApiResult<Json<NotificationSettingsResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service
        .update_settings(auth.actor(), salon_id, request)
        .await?;
    Ok(Json(response))
}
