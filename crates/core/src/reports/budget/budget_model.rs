//! Budget report models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction a budget target applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetFlow {
    Income,
    #[default]
    Expense,
}

/// Domain model representing a stored budget target.
///
/// Targets are stored in reference-currency minor units at the budget's own
/// fixed granularity (Monthly unless configured otherwise) and rescaled on
/// read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEntry {
    pub category_id: String,
    pub flow: BudgetFlow,
    pub target: i64,
}

/// Budget-vs-actual for one category, in the requested currency and
/// granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    /// `None` for actuals on uncategorized transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub flow: BudgetFlow,
    /// Target rescaled to the requested granularity and currency.
    pub target: i64,
    /// Actual magnitude for the compared period.
    pub actual: i64,
    pub remaining: i64,
    /// `actual / target` as a percentage; `None` when the target is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Decimal>,
}

/// Budget-vs-actual rows for one time bucket. The targets repeat the same
/// full-period value in every bucket; only the actuals vary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBucketComparison {
    pub bucket_key: String,
    pub label: String,
    pub rows: Vec<BudgetComparison>,
}

/// Totals row across a set of budget comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    pub target: i64,
    pub actual: i64,
    pub remaining: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Decimal>,
}
