//! Budget normalization - rescaling stored targets and merging them against
//! actual aggregated spend/income per category.

use log::warn;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

use super::budget_model::{
    BudgetBucketComparison, BudgetComparison, BudgetEntry, BudgetFlow, BudgetTotals,
};
use crate::calendar::{rescale_multiplier, Granularity};
use crate::categories::Category;
use crate::constants::{RATIO_DECIMAL_PRECISION, UNCATEGORIZED_CATEGORY_NAME};
use crate::errors::Result;
use crate::fx::{convert_amount, round_minor_units, RateSet};
use crate::reports::aggregation::bucket_category_magnitudes;
use crate::transactions::Transaction;

/// Rescales a stored target to the requested granularity and currency.
///
/// The currency conversion uses the unscaled stored target and the granularity
/// multiplier is applied to the conversion result: convert once, scale once,
/// so rounding error is not compounded.
pub fn scale_target(
    target: i64,
    stored_granularity: Granularity,
    requested_granularity: Granularity,
    requested_currency: &str,
    rates: &RateSet,
) -> i64 {
    if stored_granularity == Granularity::Daily || requested_granularity == Granularity::Daily {
        warn!(
            "Daily is not a budget granularity ({} -> {}); target not rescaled",
            stored_granularity, requested_granularity
        );
    }

    let converted = convert_amount(target, rates.reference(), requested_currency, rates);
    let multiplier = rescale_multiplier(stored_granularity, requested_granularity);
    if multiplier == Decimal::ONE {
        return converted;
    }
    round_minor_units(Decimal::from(converted) * multiplier)
}

/// Merges scaled budget targets against actual per-category magnitudes.
///
/// Every budget entry appears even with no matching transactions, and every
/// category with actual transactions appears even without a budget entry
/// (target 0, flow defaulted to Expense) so spend never drops out of sight.
pub fn compare_budgets(
    entries: &[BudgetEntry],
    transactions: &[Transaction],
    categories: &[Category],
    stored_granularity: Granularity,
    requested_granularity: Granularity,
    requested_currency: &str,
    rates: &RateSet,
) -> Vec<BudgetComparison> {
    let mut actuals: HashMap<Option<String>, i64> = HashMap::new();
    for tx in transactions {
        let converted = convert_amount(tx.amount, &tx.currency, requested_currency, rates);
        *actuals.entry(tx.category_id.clone()).or_insert(0) += converted;
    }
    for value in actuals.values_mut() {
        *value = value.abs();
    }

    build_rows(
        entries,
        &actuals,
        categories,
        stored_granularity,
        requested_granularity,
        requested_currency,
        rates,
    )
}

/// Budget-vs-actual per time bucket. Each bucket reports that bucket's
/// actuals against the same bucket-invariant scaled target.
pub fn compare_budgets_over_time(
    entries: &[BudgetEntry],
    transactions: &[Transaction],
    categories: &[Category],
    granularity: Granularity,
    stored_granularity: Granularity,
    requested_currency: &str,
    rates: &RateSet,
) -> Result<Vec<BudgetBucketComparison>> {
    let per_bucket =
        bucket_category_magnitudes(transactions, granularity, requested_currency, rates);

    per_bucket
        .into_iter()
        .map(|(bucket_key, actuals)| {
            let label = granularity.display_label(&bucket_key)?;
            Ok(BudgetBucketComparison {
                label,
                rows: build_rows(
                    entries,
                    &actuals,
                    categories,
                    stored_granularity,
                    granularity,
                    requested_currency,
                    rates,
                ),
                bucket_key,
            })
        })
        .collect()
}

/// Totals row across a comparison.
pub fn summarize_budgets(rows: &[BudgetComparison]) -> BudgetTotals {
    let target: i64 = rows.iter().map(|r| r.target).sum();
    let actual: i64 = rows.iter().map(|r| r.actual).sum();
    BudgetTotals {
        target,
        actual,
        remaining: target - actual,
        progress: progress_of(actual, target),
    }
}

fn build_rows(
    entries: &[BudgetEntry],
    actuals: &HashMap<Option<String>, i64>,
    categories: &[Category],
    stored_granularity: Granularity,
    requested_granularity: Granularity,
    requested_currency: &str,
    rates: &RateSet,
) -> Vec<BudgetComparison> {
    let category_map: HashMap<&str, &Category> =
        categories.iter().map(|c| (c.id.as_str(), c)).collect();
    let entry_map: HashMap<&str, &BudgetEntry> =
        entries.iter().map(|e| (e.category_id.as_str(), e)).collect();

    // Union of budgeted categories and categories that actually saw
    // transactions, with the uncategorized sentinel last.
    let mut budgeted_ids: BTreeSet<&str> = entry_map.keys().copied().collect();
    budgeted_ids.extend(actuals.keys().filter_map(|id| id.as_deref()));
    let has_uncategorized_actuals = actuals.contains_key(&None);

    let mut rows: Vec<BudgetComparison> = budgeted_ids
        .into_iter()
        .map(|id| {
            let entry = entry_map.get(id).copied();
            let category = category_map.get(id).copied();
            let target = entry
                .map(|e| {
                    scale_target(
                        e.target,
                        stored_granularity,
                        requested_granularity,
                        requested_currency,
                        rates,
                    )
                })
                .unwrap_or(0);
            let actual = actuals.get(&Some(id.to_string())).copied().unwrap_or(0);

            BudgetComparison {
                category_id: Some(id.to_string()),
                name: category
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| id.to_string()),
                color: category.map(|c| c.color.clone()),
                flow: entry.map(|e| e.flow).unwrap_or_default(),
                target,
                actual,
                remaining: target - actual,
                progress: progress_of(actual, target),
            }
        })
        .collect();

    if has_uncategorized_actuals {
        let actual = actuals.get(&None).copied().unwrap_or(0);
        rows.push(BudgetComparison {
            category_id: None,
            name: UNCATEGORIZED_CATEGORY_NAME.to_string(),
            color: None,
            flow: BudgetFlow::Expense,
            target: 0,
            actual,
            remaining: -actual,
            progress: None,
        });
    }

    rows
}

/// Guarded progress ratio: `None` when the target is zero so a missing budget
/// never turns into NaN/Infinity downstream.
fn progress_of(actual: i64, target: i64) -> Option<Decimal> {
    if target == 0 {
        return None;
    }
    let ratio = Decimal::from(actual) * Decimal::ONE_HUNDRED / Decimal::from(target);
    Some(ratio.round_dp(RATIO_DECIMAL_PRECISION))
}
