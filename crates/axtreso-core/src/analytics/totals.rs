use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{Transaction, TransactionType};

/// Sums by direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub total_in: Decimal,
    pub total_out: Decimal,
    /// Always `total_in - total_out`
    pub net_balance: Decimal,
}

impl Totals {
    pub fn new(total_in: Decimal, total_out: Decimal) -> Self {
        Self {
            total_in,
            total_out,
            net_balance: total_in - total_out,
        }
    }
}

/// Sum amounts by transaction type
pub fn totals(transactions: &[Transaction]) -> Totals {
    let (total_in, total_out) = transactions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(cash_in, cash_out), tx| match tx.transaction_type {
            TransactionType::Encaissement => (cash_in + tx.amount, cash_out),
            TransactionType::Decaissement => (cash_in, cash_out + tx.amount),
        },
    );
    Totals::new(total_in, total_out)
}
