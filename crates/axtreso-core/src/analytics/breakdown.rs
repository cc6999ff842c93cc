use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::entities::{Transaction, TransactionType};

/// Sum amounts per designation for one direction
pub fn breakdown(
    transactions: &[Transaction],
    transaction_type: TransactionType,
) -> BTreeMap<String, Decimal> {
    let mut sums = BTreeMap::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.transaction_type == transaction_type)
    {
        *sums.entry(tx.designation.clone()).or_insert(Decimal::ZERO) += tx.amount;
    }
    sums
}

/// Keep the `n` largest entries; equal amounts keep the alphabetically first designation
pub fn top_n(sums: &BTreeMap<String, Decimal>, n: usize) -> BTreeMap<String, Decimal> {
    let mut entries: Vec<(&String, &Decimal)> = sums.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(designation, amount)| (designation.clone(), *amount))
        .collect()
}
