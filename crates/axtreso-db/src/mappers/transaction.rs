//! Transaction entity <-> model mapper

use axtreso_core::entities::Transaction;
use axtreso_core::error::DomainError;

use crate::models::TransactionModel;

use super::corrupt_column;

impl TryFrom<TransactionModel> for Transaction {
    type Error = DomainError;

    fn try_from(model: TransactionModel) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: model.id,
            salon_id: model.salon_id,
            transaction_type: model
                .transaction_type
                .parse()
                .map_err(|e| corrupt_column("transactions", "transaction_type", e))?,
            designation: model.designation,
            amount: model.amount,
            comment: model.comment,
            date: model.date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
