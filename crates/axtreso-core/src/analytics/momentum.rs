use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use super::local_day;
use crate::entities::{Momentum, PeakDay, Transaction, TransactionType};

/// Peak days, active-day count, and busiest weekday
///
/// Ties go to the earliest date, and to the earliest weekday starting Monday.
pub fn momentum(transactions: &[Transaction], tz: Tz) -> Momentum {
    let mut cash_in: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut cash_out: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut weekdays = [Decimal::ZERO; 7];

    for tx in transactions {
        let day = local_day(tx, tz);
        match tx.transaction_type {
            TransactionType::Encaissement => {
                *cash_in.entry(day).or_default() += tx.amount;
                weekdays[day.weekday().num_days_from_monday() as usize] += tx.amount;
            }
            TransactionType::Decaissement => {
                *cash_out.entry(day).or_default() += tx.amount;
            }
        }
    }

    let active_days = cash_in
        .keys()
        .chain(cash_out.keys())
        .collect::<std::collections::BTreeSet<_>>()
        .len() as u32;

    let busiest_weekday = weekdays
        .iter()
        .enumerate()
        .filter(|(_, total)| !total.is_zero())
        .fold(None::<(usize, Decimal)>, |best, (idx, total)| match best {
            Some((_, best_total)) if best_total >= *total => best,
            _ => Some((idx, *total)),
        })
        .and_then(|(idx, _)| Weekday::try_from(idx as u8).ok());

    Momentum {
        encaissements_peak: peak(&cash_in),
        decaissements_peak: peak(&cash_out),
        active_days,
        busiest_weekday,
    }
}

fn peak(per_day: &BTreeMap<NaiveDate, Decimal>) -> Option<PeakDay> {
    per_day
        .iter()
        .fold(None::<PeakDay>, |best, (date, amount)| match best {
            Some(current) if current.amount >= *amount => Some(current),
            _ => Some(PeakDay {
                date: *date,
                amount: *amount,
            }),
        })
}
