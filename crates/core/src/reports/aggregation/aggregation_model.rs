//! Aggregation report models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a category breakdown.
///
/// `value` is the absolute magnitude of the category's signed sum in the
/// target currency; direction context (income vs expense) comes from the kind
/// filter the caller applied before aggregating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// `None` for the uncategorized sentinel bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub value: i64,
    /// Number of transactions contributing to this slice.
    pub count: u32,
    /// Percentage of the breakdown total; `None` when the total is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<Decimal>,
}

/// One point of a bucketed total series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTotal {
    pub bucket_key: String,
    pub label: String,
    pub value: i64,
}

/// One point of an income-vs-expenses series. `expenses` is reported as a
/// positive magnitude.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeExpenseBucket {
    pub bucket_key: String,
    pub label: String,
    pub income: i64,
    pub expenses: i64,
    pub difference: i64,
}

/// Headline totals for a transaction set in the requested currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub currency: String,
    pub income: i64,
    /// Positive magnitude.
    pub expenses: i64,
    pub net: i64,
}
