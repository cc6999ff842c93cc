//! Transaction handlers
//!
//! Cash movements are nested under their salon.

use axtreso_service::dto::{
    CreateTransactionRequest, TransactionQuery, TransactionResponse, UpdateTransactionRequest,
};
use axtreso_service::TransactionService;
use axum::{extract::State, Json};

use crate::extractors::{ApiQuery, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Record an encaissement or décaissement
///
/// POST /salons/{salon_id}/transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<CreateTransactionRequest>,
) -> ApiResult<Created<Json<TransactionResponse>>> {
    let service = TransactionService::new(state.service_context());
    let response = service.create(auth.actor(), salon_id, request).await?;
    Ok(Created(Json(response)))
}

/// List transactions with optional `from`, `to`, `type`, `designation`,
/// and `search` filters
///
/// GET /salons/{salon_id}/transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(salon_id): IdPath<i64>,
    ApiQuery(query): ApiQuery<TransactionQuery>,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let service = TransactionService::new(state.service_context());
    let response = service.get_by_salon(auth.actor(), salon_id, query).await?;
    Ok(Json(response))
}

/// GET /salons/{salon_id}/transactions/{transaction_id}
pub async fn get_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath((salon_id, transaction_id)): IdPath<(i64, i64)>,
) -> ApiResult<Json<TransactionResponse>> {
    let service = TransactionService::new(state.service_context());
    let response = service
        .get_by_id(auth.actor(), salon_id, transaction_id)
        .await?;
    Ok(Json(response))
}

/// PATCH /salons/{salon_id}/transactions/{transaction_id}
pub async fn update_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath((salon_id, transaction_id)): IdPath<(i64, i64)>,
    ValidatedJson(request): ValidatedJson<UpdateTransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    let service = TransactionService::new(state.service_context());
    let response = service
        .update(auth.actor(), salon_id, transaction_id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /salons/{salon_id}/transactions/{transaction_id}
pub async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath((salon_id, transaction_id)): IdPath<(i64, i64)>,
) -> ApiResult<NoContent> {
    let service = TransactionService::new(state.service_context());
    service
        .delete(auth.actor(), salon_id, transaction_id)
        .await?;
    Ok(NoContent)
}
