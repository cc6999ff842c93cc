//! Transaction service
//!
//! Cash movements are addressed within their salon: the salon check runs
//! first, then the transaction is looked up inside that salon.

use axtreso_core::entities::{NewTransaction, Salon};
use axtreso_core::{DateRange, DomainError, TransactionFilter};
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::json;
use tracing::{info, instrument};

use crate::dto::{
    CreateTransactionRequest, TransactionQuery, TransactionResponse, UpdateTransactionRequest,
};

use super::access::{salon_for, Actor, SalonAccess};
use super::audit;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Largest amount a NUMERIC(12,2) column holds
const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Round to cents and fix the scale at two places
pub(crate) fn normalize_amount(amount: Decimal) -> ServiceResult<Decimal> {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);

    if cents <= Decimal::ZERO {
        return Err(DomainError::NonPositiveAmount.into());
    }
    if cents > MAX_AMOUNT {
        return Err(ServiceError::validation(format!(
            "Amount must not exceed {MAX_AMOUNT}"
        )));
    }
    Ok(cents)
}

/// Translate list filters into store bounds using the salon's local calendar
pub(crate) fn filter_for(salon: &Salon, query: TransactionQuery) -> ServiceResult<TransactionFilter> {
    let tz = salon.city.timezone();

    let (from, to) = match (query.from, query.to) {
        (Some(start), Some(end)) => {
            let (from, to) = DateRange::new(start, end)?.utc_bounds(tz);
            (Some(from), Some(to))
        }
        (Some(start), None) => (Some(DateRange::new(start, start)?.utc_bounds(tz).0), None),
        (None, Some(end)) => (None, Some(DateRange::new(end, end)?.utc_bounds(tz).1)),
        (None, None) => (None, None),
    };

    Ok(TransactionFilter {
        from,
        to,
        transaction_type: query.transaction_type,
        designation: query.designation.filter(|d| !d.trim().is_empty()),
        search: query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    })
}

/// Transaction service
pub struct TransactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TransactionService<'a> {
    /// Create a new TransactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a cash movement in the caller's salon
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        salon_id: i64,
        request: CreateTransactionRequest,
    ) -> ServiceResult<TransactionResponse> {
        let salon = salon_for(self.ctx, actor, SalonAccess::ManageOwn, salon_id).await?;

        let new_tx = NewTransaction {
            salon_id: salon.id,
            transaction_type: request.transaction_type,
            designation: request.designation.trim().to_string(),
            amount: normalize_amount(request.amount)?,
            comment: request.comment.filter(|c| !c.trim().is_empty()),
            date: request.date.unwrap_or_else(Utc::now),
        };
        new_tx.validate()?;

        let tx = self.ctx.transaction_repo().create(&new_tx).await?;

        info!(salon_id, transaction_id = tx.id, kind = %tx.transaction_type, "Transaction recorded");
        audit::record(
            self.ctx,
            actor,
            Some(salon.id),
            format!("transaction_created_{}", tx.transaction_type),
            json!({
                "transaction_id": tx.id,
                "amount": tx.amount,
                "designation": tx.designation,
            }),
        )
        .await;

        Ok(TransactionResponse::from(tx))
    }

    /// Transactions of a salon, most recent first
    #[instrument(skip(self))]
    pub async fn get_by_salon(
        &self,
        actor: Actor,
        salon_id: i64,
        query: TransactionQuery,
    ) -> ServiceResult<Vec<TransactionResponse>> {
        let salon = salon_for(self.ctx, actor, SalonAccess::Read, salon_id).await?;
        let filter = filter_for(&salon, query)?;

        let txs = self
            .ctx
            .transaction_repo()
            .list_by_salon(salon.id, &filter)
            .await?;

        Ok(txs.into_iter().map(TransactionResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(
        &self,
        actor: Actor,
        salon_id: i64,
        transaction_id: i64,
    ) -> ServiceResult<TransactionResponse> {
        let salon = salon_for(self.ctx, actor, SalonAccess::Read, salon_id).await?;

        let tx = self
            .ctx
            .transaction_repo()
            .find_in_salon(salon.id, transaction_id)
            .await?
            .ok_or(DomainError::TransactionNotFound(transaction_id))?;

        Ok(TransactionResponse::from(tx))
    }

    /// Edit designation, amount, comment, or date; the type is fixed
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: Actor,
        salon_id: i64,
        transaction_id: i64,
        request: UpdateTransactionRequest,
    ) -> ServiceResult<TransactionResponse> {
        let salon = salon_for(self.ctx, actor, SalonAccess::ManageOwn, salon_id).await?;

        let mut tx = self
            .ctx
            .transaction_repo()
            .find_in_salon(salon.id, transaction_id)
            .await?
            .ok_or(DomainError::TransactionNotFound(transaction_id))?;

        if let Some(designation) = request.designation {
            tx.designation = designation.trim().to_string();
        }
        if let Some(amount) = request.amount {
            tx.amount = normalize_amount(amount)?;
        }
        if let Some(comment) = request.comment {
            tx.comment = Some(comment).filter(|c| !c.trim().is_empty());
        }
        if let Some(date) = request.date {
            tx.date = date;
        }

        NewTransaction {
            salon_id: tx.salon_id,
            transaction_type: tx.transaction_type,
            designation: tx.designation.clone(),
            amount: tx.amount,
            comment: None,
            date: tx.date,
        }
        .validate()?;

        tx.updated_at = Utc::now();
        self.ctx.transaction_repo().update(&tx).await?;

        audit::record(
            self.ctx,
            actor,
            Some(salon.id),
            "transaction_updated",
            json!({
                "transaction_id": tx.id,
                "amount": tx.amount,
                "designation": tx.designation,
            }),
        )
        .await;

        Ok(TransactionResponse::from(tx))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, salon_id: i64, transaction_id: i64) -> ServiceResult<()> {
        let salon = salon_for(self.ctx, actor, SalonAccess::ManageOwn, salon_id).await?;

        let tx = self
            .ctx
            .transaction_repo()
            .find_in_salon(salon.id, transaction_id)
            .await?
            .ok_or(DomainError::TransactionNotFound(transaction_id))?;

        self.ctx.transaction_repo().delete(tx.id).await?;

        info!(salon_id, transaction_id, "Transaction deleted");
        audit::record(
            self.ctx,
            actor,
            Some(salon.id),
            "transaction_deleted",
            json!({
                "transaction_id": tx.id,
                "type": tx.transaction_type,
                "amount": tx.amount,
                "designation": tx.designation,
            }),
        )
        .await;

        Ok(())
    }
}
