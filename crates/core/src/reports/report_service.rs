//! Report service implementation.
//!
//! Resolves the request's rate snapshot once, then fans out to the pure
//! calculators. Holds no state beyond its collaborators; every call computes
//! from the caller-supplied snapshots.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use super::aggregation::{
    aggregate_by_bucket, aggregate_by_category, aggregate_income_expenses, summarize_period,
    BucketTotal, CategorySummary, IncomeExpenseBucket, PeriodSummary,
};
use super::budget::{
    compare_budgets, compare_budgets_over_time, BudgetBucketComparison, BudgetComparison,
    BudgetEntry,
};
use super::forecast::{extrapolate_balances, ForecastBucket};
use super::positions::{build_positions, PositionsBucket};
use super::report_traits::ReportServiceTrait;
use crate::accounts::Account;
use crate::calendar::Granularity;
use crate::categories::Category;
use crate::errors::Result;
use crate::fx::{FxServiceTrait, RateSet};
use crate::transactions::Transaction;

pub struct ReportService {
    fx_service: Arc<dyn FxServiceTrait>,
}

impl ReportService {
    pub fn new(fx_service: Arc<dyn FxServiceTrait>) -> Self {
        Self { fx_service }
    }

    /// Resolves rates for every currency the computation will touch: the
    /// transaction currencies, any account currencies, and the target.
    async fn resolve_for(
        &self,
        transactions: &[Transaction],
        accounts: &[Account],
        target_currency: &str,
        as_of: NaiveDate,
    ) -> RateSet {
        let mut currencies: HashSet<String> = transactions
            .iter()
            .map(|tx| tx.currency.clone())
            .collect();
        currencies.extend(accounts.iter().map(|a| a.currency.clone()));
        currencies.insert(target_currency.to_string());

        self.fx_service.resolve_rates(&currencies, as_of).await
    }
}

#[allow(clippy::too_many_arguments)]
#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn category_breakdown(
        &self,
        transactions: &[Transaction],
        categories: &[Category],
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<CategorySummary>> {
        debug!(
            "Category breakdown over {} transaction(s) in {}",
            transactions.len(),
            target_currency
        );
        let rates = self
            .resolve_for(transactions, &[], target_currency, as_of)
            .await;
        Ok(aggregate_by_category(
            transactions,
            categories,
            target_currency,
            &rates,
        ))
    }

    async fn totals_over_time(
        &self,
        transactions: &[Transaction],
        granularity: Granularity,
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<BucketTotal>> {
        let rates = self
            .resolve_for(transactions, &[], target_currency, as_of)
            .await;
        aggregate_by_bucket(transactions, granularity, target_currency, &rates)
    }

    async fn income_vs_expenses(
        &self,
        transactions: &[Transaction],
        granularity: Granularity,
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<IncomeExpenseBucket>> {
        let rates = self
            .resolve_for(transactions, &[], target_currency, as_of)
            .await;
        aggregate_income_expenses(transactions, granularity, target_currency, &rates)
    }

    async fn period_summary(
        &self,
        transactions: &[Transaction],
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<PeriodSummary> {
        let rates = self
            .resolve_for(transactions, &[], target_currency, as_of)
            .await;
        Ok(summarize_period(transactions, target_currency, &rates))
    }

    async fn budget_comparison(
        &self,
        entries: &[BudgetEntry],
        transactions: &[Transaction],
        categories: &[Category],
        stored_granularity: Granularity,
        requested_granularity: Granularity,
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<BudgetComparison>> {
        debug!(
            "Budget comparison: {} entr(ies), {} transaction(s), {} -> {}",
            entries.len(),
            transactions.len(),
            stored_granularity,
            requested_granularity
        );
        let rates = self
            .resolve_for(transactions, &[], target_currency, as_of)
            .await;
        Ok(compare_budgets(
            entries,
            transactions,
            categories,
            stored_granularity,
            requested_granularity,
            target_currency,
            &rates,
        ))
    }

    async fn budget_over_time(
        &self,
        entries: &[BudgetEntry],
        transactions: &[Transaction],
        categories: &[Category],
        granularity: Granularity,
        stored_granularity: Granularity,
        target_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Vec<BudgetBucketComparison>> {
        let rates = self
            .resolve_for(transactions, &[], target_currency, as_of)
            .await;
        compare_budgets_over_time(
            entries,
            transactions,
            categories,
            granularity,
            stored_granularity,
            target_currency,
            &rates,
        )
    }

    async fn balance_positions(
        &self,
        transactions: &[Transaction],
        accounts: &[Account],
        granularity: Granularity,
        target_currency: &str,
        window: Option<(NaiveDate, NaiveDate)>,
        as_of: NaiveDate,
    ) -> Result<Vec<PositionsBucket>> {
        debug!(
            "Balance positions over {} account(s), {} granularity",
            accounts.len(),
            granularity
        );
        let rates = self
            .resolve_for(transactions, accounts, target_currency, as_of)
            .await;
        build_positions(
            transactions,
            accounts,
            granularity,
            target_currency,
            &rates,
            window,
        )
    }

    async fn balance_forecast(
        &self,
        transactions: &[Transaction],
        accounts: &[Account],
        granularity: Granularity,
        target_currency: &str,
        window: Option<(NaiveDate, NaiveDate)>,
        as_of: NaiveDate,
    ) -> Result<Vec<ForecastBucket>> {
        let positions = self
            .balance_positions(
                transactions,
                accounts,
                granularity,
                target_currency,
                window,
                as_of,
            )
            .await?;
        extrapolate_balances(&positions, granularity)
    }
}
