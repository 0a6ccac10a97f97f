//! Report service trait - the seam report/budget request handlers call.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::aggregation::{BucketTotal, CategorySummary, IncomeExpenseBucket, PeriodSummary};
use super::budget::{BudgetBucketComparison, BudgetComparison, BudgetEntry};
use super::forecast::ForecastBucket;
use super::positions::PositionsBucket;
use crate::accounts::Account;
use crate::calendar::Granularity;
use crate::categories::Category;
use crate::errors::Result;
use crate::transactions::Transaction;

/// Trait defining the contract for report computations.
///
/// All inputs are caller-fetched, pre-filtered in-memory snapshots; every
/// call is a request-scoped pure computation plus one batched rate
/// resolution. `as_of` is the request timestamp (normally today) used to pick
/// the effective exchange rates, so historical requests stay reproducible.
#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    async fn category_breakdown(
        &self,
        transactions: &[Transaction],
        categories: &[Category],
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<CategorySummary>>;

    async fn totals_over_time(
        &self,
        transactions: &[Transaction],
        granularity: Granularity,
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<BucketTotal>>;

    async fn income_vs_expenses(
        &self,
        transactions: &[Transaction],
        granularity: Granularity,
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<IncomeExpenseBucket>>;

    async fn period_summary(
        &self,
        transactions: &[Transaction],
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<PeriodSummary>;

    #[allow(clippy::too_many_arguments)]
    async fn budget_comparison(
        &self,
        entries: &[BudgetEntry],
        transactions: &[Transaction],
        categories: &[Category],
        stored_granularity: Granularity,
        requested_granularity: Granularity,
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<BudgetComparison>>;

    #[allow(clippy::too_many_arguments)]
    async fn budget_over_time(
        &self,
        entries: &[BudgetEntry],
        transactions: &[Transaction],
        categories: &[Category],
        granularity: Granularity,
        stored_granularity: Granularity,
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<BudgetBucketComparison>>;

    #[allow(clippy::too_many_arguments)]
    async fn balance_positions(
        &self,
        transactions: &[Transaction],
        accounts: &[Account],
        granularity: Granularity,
        target_currency: &str,
        window: Option<(NaiveDate, NaiveDate)>,
        as_of: NaiveDate,
    ) -> Result<Vec<PositionsBucket>>;

    #[allow(clippy::too_many_arguments)]
    async fn balance_forecast(
        &self,
        transactions: &[Transaction],
        accounts: &[Account],
        granularity: Granularity,
        target_currency: &str,
        window: Option<(NaiveDate, NaiveDate)>,
        as_of: NaiveDate,
    ) -> Result<Vec<ForecastBucket>>;
}
