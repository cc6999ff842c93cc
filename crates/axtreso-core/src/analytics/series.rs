use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;

use super::local_day;
use crate::entities::{Transaction, TransactionType};
use crate::value_objects::DateRange;

/// One day of a trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub total_in: Decimal,
    pub total_out: Decimal,
    pub balance: Decimal,
}

/// Bucket transactions per local calendar day across `window`
///
/// The result has exactly one point per day of the window, in order; days
/// without transactions are zero. Transactions outside the window are ignored.
pub fn daily_series(transactions: &[Transaction], window: &DateRange, tz: Tz) -> Vec<DailyPoint> {
    let mut per_day: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for tx in transactions {
        let day = local_day(tx, tz);
        if !window.contains(day) {
            continue;
        }
        let entry = per_day.entry(day).or_default();
        match tx.transaction_type {
            TransactionType::Encaissement => entry.0 += tx.amount,
            TransactionType::Decaissement => entry.1 += tx.amount,
        }
    }

    window
        .days()
        .map(|date| {
            let (total_in, total_out) = per_day.get(&date).copied().unwrap_or_default();
            DailyPoint {
                date,
                total_in,
                total_out,
                balance: total_in - total_out,
            }
        })
        .collect()
}
