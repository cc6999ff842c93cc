//! Dashboard service
//!
//! Chart-ready aggregates over a salon's recent activity, in the salon's
//! local calendar.

use axtreso_core::analytics::local_day;
use axtreso_core::entities::{Salon, Transaction};
use axtreso_core::{
    breakdown, daily_series, totals, DateRange, Totals, TransactionFilter, TransactionType,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::dto::{
    AdminOverviewResponse, BreakdownSlice, ChartPoint, DashboardQuery, SalonDashboardResponse,
    SalonResponse, SalonTotalsResponse,
};

use super::access::{salon_for, Actor, SalonAccess};
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Days before today shown in the trend chart
pub const DEFAULT_TREND_DAYS: u32 = 10;
pub const MAX_TREND_DAYS: u32 = 90;
/// Trailing window of the administrator overview
pub const OVERVIEW_DAYS: u32 = 30;

/// Current calendar day in the salon's city
fn local_today(salon: &Salon) -> NaiveDate {
    Utc::now().with_timezone(&salon.city.timezone()).date_naive()
}

/// Build the dashboard of a salon from transactions covering the trend
/// window and the current month
pub fn summarize(
    salon: &Salon,
    today: NaiveDate,
    trend_days: u32,
    transactions: &[Transaction],
) -> SalonDashboardResponse {
    let tz = salon.city.timezone();
    let window = DateRange::last_n_days(today, trend_days.saturating_add(1));
    let month = DateRange::month_of(today);

    let (today_txs, month_txs): (Vec<Transaction>, Vec<Transaction>) = (
        transactions
            .iter()
            .filter(|tx| local_day(tx, tz) == today)
            .cloned()
            .collect(),
        transactions
            .iter()
            .filter(|tx| month.contains(local_day(tx, tz)))
            .cloned()
            .collect(),
    );

    let mut slices: Vec<(String, Decimal)> = breakdown(&month_txs, TransactionType::Encaissement)
        .into_iter()
        .collect();
    slices.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    SalonDashboardResponse {
        salon: SalonResponse::from(salon),
        today,
        today_totals: totals(&today_txs),
        month_totals: totals(&month_txs),
        trend: daily_series(transactions, &window, tz)
            .iter()
            .map(ChartPoint::from)
            .collect(),
        month_encaissements: slices
            .iter()
            .map(|(designation, amount)| BreakdownSlice::from((designation, amount)))
            .collect(),
    }
}

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Today, this month, and the recent trend of one salon
    #[instrument(skip(self))]
    pub async fn salon_dashboard(
        &self,
        actor: Actor,
        salon_id: i64,
        query: DashboardQuery,
    ) -> ServiceResult<SalonDashboardResponse> {
        let salon = salon_for(self.ctx, actor, SalonAccess::Read, salon_id).await?;

        let trend_days = query
            .days
            .unwrap_or(DEFAULT_TREND_DAYS)
            .min(MAX_TREND_DAYS);
        let today = local_today(&salon);
        let window = DateRange::last_n_days(today, trend_days + 1);
        let earliest = window.start().min(DateRange::month_of(today).start());

        let (from, to) = DateRange::new(earliest, today)?.utc_bounds(salon.city.timezone());
        let transactions = self
            .ctx
            .transaction_repo()
            .list_by_salon(salon.id, &TransactionFilter::between(from, to))
            .await?;

        Ok(summarize(&salon, today, trend_days, &transactions))
    }

    /// Per-salon and combined totals over the trailing 30 days
    #[instrument(skip(self))]
    pub async fn admin_overview(&self, actor: Actor) -> ServiceResult<AdminOverviewResponse> {
        actor.require_admin()?;

        let salons = self.ctx.salon_repo().list_all().await?;
        let mut rows = Vec::with_capacity(salons.len());
        let (mut total_in, mut total_out) = (Decimal::ZERO, Decimal::ZERO);

        for salon in salons {
            let window = DateRange::last_n_days(local_today(&salon), OVERVIEW_DAYS);
            let (from, to) = window.utc_bounds(salon.city.timezone());
            let transactions = self
                .ctx
                .transaction_repo()
                .list_by_salon(salon.id, &TransactionFilter::between(from, to))
                .await?;

            let salon_totals = totals(&transactions);
            total_in += salon_totals.total_in;
            total_out += salon_totals.total_out;
            rows.push(SalonTotalsResponse {
                salon: SalonResponse::from(salon),
                totals: salon_totals,
            });
        }

        Ok(AdminOverviewResponse {
            period_days: OVERVIEW_DAYS,
            salons: rows,
            combined: Totals::new(total_in, total_out),
        })
    }
}
