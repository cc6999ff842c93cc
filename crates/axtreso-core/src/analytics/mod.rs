//! Aggregation helpers for dashboards and reports
//!
//! Every function works on transactions that were already filtered by salon
//! and period. Sums stay exact decimals; converting to floating point is left
//! to whoever renders a chart.

mod breakdown;
mod momentum;
mod series;
mod totals;

pub use breakdown::{breakdown, top_n};
pub use momentum::momentum;
pub use series::{daily_series, DailyPoint};
pub use totals::{totals, Totals};

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::entities::Transaction;

/// Calendar day of a transaction in the salon's local timezone
pub fn local_day(transaction: &Transaction, tz: Tz) -> NaiveDate {
    transaction.date.with_timezone(&tz).date_naive()
}
