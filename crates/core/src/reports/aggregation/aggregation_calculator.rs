//! Pure aggregation over pre-filtered transaction sets.
//!
//! Callers apply all filtering (date range, accounts, categories, kind,
//! description search) before this stage; these functions only group and sum
//! what they are given. Every amount is converted to the target currency
//! before summing; amounts are never summed cross-currency.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use super::aggregation_model::{
    BucketTotal, CategorySummary, IncomeExpenseBucket, PeriodSummary,
};
use crate::calendar::Granularity;
use crate::categories::Category;
use crate::constants::{RATIO_DECIMAL_PRECISION, UNCATEGORIZED_CATEGORY_NAME};
use crate::errors::Result;
use crate::fx::{convert_amount, RateSet};
use crate::transactions::{Transaction, TransactionKind};

/// Groups transactions by category and reports each category's magnitude in
/// the target currency, sorted descending for display.
pub fn aggregate_by_category(
    transactions: &[Transaction],
    categories: &[Category],
    target_currency: &str,
    rates: &RateSet,
) -> Vec<CategorySummary> {
    let mut sums: HashMap<Option<String>, (i64, u32)> = HashMap::new();

    for tx in transactions {
        let converted = convert_amount(tx.amount, &tx.currency, target_currency, rates);
        let entry = sums.entry(tx.category_id.clone()).or_insert((0, 0));
        entry.0 += converted;
        entry.1 += 1;
    }

    let category_map: HashMap<&str, &Category> =
        categories.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut breakdown: Vec<CategorySummary> = sums
        .into_iter()
        .map(|(category_id, (sum, count))| {
            let category = category_id
                .as_deref()
                .and_then(|id| category_map.get(id).copied());
            let name = match (category, category_id.as_deref()) {
                (Some(c), _) => c.name.clone(),
                (None, Some(id)) => id.to_string(),
                (None, None) => UNCATEGORIZED_CATEGORY_NAME.to_string(),
            };
            CategorySummary {
                name,
                color: category.map(|c| c.color.clone()),
                category_id,
                // The report communicates magnitude; sign context was already
                // applied by the caller's kind filter.
                value: sum.abs(),
                count,
                share: None,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));

    let total: i64 = breakdown.iter().map(|item| item.value).sum();
    if total > 0 {
        for item in &mut breakdown {
            let share = Decimal::from(item.value) * Decimal::ONE_HUNDRED / Decimal::from(total);
            item.share = Some(share.round_dp(RATIO_DECIMAL_PRECISION));
        }
    }

    breakdown
}

/// Groups transactions into time buckets and reports the signed converted sum
/// per bucket, ascending by bucket key.
pub fn aggregate_by_bucket(
    transactions: &[Transaction],
    granularity: Granularity,
    target_currency: &str,
    rates: &RateSet,
) -> Result<Vec<BucketTotal>> {
    // BTreeMap iteration is ascending string order, which for bucket keys is
    // chronological order. Labels are attached only at output time.
    let mut sums: BTreeMap<String, i64> = BTreeMap::new();

    for tx in transactions {
        let converted = convert_amount(tx.amount, &tx.currency, target_currency, rates);
        *sums.entry(granularity.bucket_key(tx.date)).or_insert(0) += converted;
    }

    sums.into_iter()
        .map(|(bucket_key, value)| {
            let label = granularity.display_label(&bucket_key)?;
            Ok(BucketTotal {
                bucket_key,
                label,
                value,
            })
        })
        .collect()
}

/// Per-bucket income and expense totals. Income is summed as-is; expenses are
/// summed negated so the report carries a positive magnitude. Transfers are
/// not part of this report shape.
pub fn aggregate_income_expenses(
    transactions: &[Transaction],
    granularity: Granularity,
    target_currency: &str,
    rates: &RateSet,
) -> Result<Vec<IncomeExpenseBucket>> {
    let mut sums: BTreeMap<String, (i64, i64)> = BTreeMap::new();

    for tx in transactions {
        let converted = convert_amount(tx.amount, &tx.currency, target_currency, rates);
        let entry = sums.entry(granularity.bucket_key(tx.date)).or_insert((0, 0));
        match tx.kind {
            TransactionKind::Income => entry.0 += converted,
            TransactionKind::Expense => entry.1 -= converted,
            TransactionKind::Transfer => {}
        }
    }

    sums.into_iter()
        .map(|(bucket_key, (income, expenses))| {
            let label = granularity.display_label(&bucket_key)?;
            Ok(IncomeExpenseBucket {
                bucket_key,
                label,
                income,
                expenses,
                difference: income - expenses,
            })
        })
        .collect()
}

/// Headline income/expense/net totals for the supplied transaction set.
pub fn summarize_period(
    transactions: &[Transaction],
    target_currency: &str,
    rates: &RateSet,
) -> PeriodSummary {
    let mut income: i64 = 0;
    let mut expenses: i64 = 0;

    for tx in transactions {
        let converted = convert_amount(tx.amount, &tx.currency, target_currency, rates);
        match tx.kind {
            TransactionKind::Income => income += converted,
            TransactionKind::Expense => expenses -= converted,
            TransactionKind::Transfer => {}
        }
    }

    PeriodSummary {
        currency: target_currency.to_string(),
        income,
        expenses,
        net: income - expenses,
    }
}

/// Per-bucket, per-category magnitudes used by the budget-over-time report.
pub(crate) fn bucket_category_magnitudes(
    transactions: &[Transaction],
    granularity: Granularity,
    target_currency: &str,
    rates: &RateSet,
) -> BTreeMap<String, HashMap<Option<String>, i64>> {
    let mut sums: BTreeMap<String, HashMap<Option<String>, i64>> = BTreeMap::new();

    for tx in transactions {
        let converted = convert_amount(tx.amount, &tx.currency, target_currency, rates);
        *sums
            .entry(granularity.bucket_key(tx.date))
            .or_default()
            .entry(tx.category_id.clone())
            .or_insert(0) += converted;
    }

    for bucket in sums.values_mut() {
        for value in bucket.values_mut() {
            *value = value.abs();
        }
    }

    sums
}
