//! Unit tests for the budget normalizer.

use super::budget_calculator::*;
use super::budget_model::{BudgetEntry, BudgetFlow};
use crate::calendar::Granularity;
use crate::categories::Category;
use crate::fx::RateSet;
use crate::transactions::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn entry(category_id: &str, flow: BudgetFlow, target: i64) -> BudgetEntry {
    BudgetEntry {
        category_id: category_id.to_string(),
        flow,
        target,
    }
}

fn expense(id: &str, category_id: Option<&str>, amount: i64, y: i32, m: u32, d: u32) -> Transaction {
    Transaction {
        id: id.to_string(),
        account_id: "acc-1".to_string(),
        category_id: category_id.map(|c| c.to_string()),
        kind: TransactionKind::Expense,
        amount,
        currency: "EUR".to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        description: None,
    }
}

fn eur_rates() -> RateSet {
    let mut rates = RateSet::new("EUR");
    rates.insert("USD", dec!(2));
    rates
}

#[test]
fn test_scale_target_identity_when_granularities_match() {
    let rates = eur_rates();
    assert_eq!(
        scale_target(30000, Granularity::Monthly, Granularity::Monthly, "EUR", &rates),
        30000
    );
}

#[test]
fn test_scale_target_monthly_to_yearly_and_back() {
    let rates = eur_rates();
    let yearly = scale_target(10000, Granularity::Monthly, Granularity::Yearly, "EUR", &rates);
    assert_eq!(yearly, 120000);
    let monthly = scale_target(yearly, Granularity::Yearly, Granularity::Monthly, "EUR", &rates);
    assert_eq!(monthly, 10000);
}

#[test]
fn test_scale_target_converts_currency_once_before_scaling() {
    let rates = eur_rates();
    // 100.00 EUR stored monthly -> USD yearly: 200.00 USD * 12
    let scaled = scale_target(10000, Granularity::Monthly, Granularity::Yearly, "USD", &rates);
    assert_eq!(scaled, 240000);
}

#[test]
fn test_comparison_merges_targets_and_actuals() {
    let categories = vec![Category::new("groceries", "Groceries", "#16a34a")];
    let entries = vec![entry("groceries", BudgetFlow::Expense, 40000)];
    let transactions = vec![
        expense("t1", Some("groceries"), -12000, 2024, 4, 2),
        expense("t2", Some("groceries"), -8000, 2024, 4, 20),
    ];

    let rows = compare_budgets(
        &entries,
        &transactions,
        &categories,
        Granularity::Monthly,
        Granularity::Monthly,
        "EUR",
        &eur_rates(),
    );

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Groceries");
    assert_eq!(rows[0].target, 40000);
    assert_eq!(rows[0].actual, 20000);
    assert_eq!(rows[0].remaining, 20000);
    assert_eq!(rows[0].progress.unwrap(), dec!(50.00));
}

#[test]
fn test_category_without_budget_entry_defaults_to_zero_target() {
    let categories = vec![Category::new("dining", "Dining", "#f97316")];
    let transactions = vec![expense("t1", Some("dining"), -5000, 2024, 4, 5)];

    let rows = compare_budgets(
        &[],
        &transactions,
        &categories,
        Granularity::Monthly,
        Granularity::Monthly,
        "EUR",
        &eur_rates(),
    );

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].target, 0);
    assert_eq!(rows[0].actual, 5000);
    assert_eq!(rows[0].flow, BudgetFlow::Expense);
    // Zero target: no ratio rather than a division by zero.
    assert_eq!(rows[0].progress, None);
}

#[test]
fn test_budget_entry_without_transactions_still_listed() {
    let categories = vec![Category::new("savings", "Savings", "#0ea5e9")];
    let entries = vec![entry("savings", BudgetFlow::Income, 50000)];

    let rows = compare_budgets(
        &entries,
        &[],
        &categories,
        Granularity::Monthly,
        Granularity::Monthly,
        "EUR",
        &eur_rates(),
    );

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].actual, 0);
    assert_eq!(rows[0].target, 50000);
    assert_eq!(rows[0].flow, BudgetFlow::Income);
    assert_eq!(rows[0].progress.unwrap(), dec!(0.00));
}

#[test]
fn test_uncategorized_actuals_get_sentinel_row() {
    let transactions = vec![expense("t1", None, -700, 2024, 4, 9)];

    let rows = compare_budgets(
        &[],
        &transactions,
        &[],
        Granularity::Monthly,
        Granularity::Monthly,
        "EUR",
        &eur_rates(),
    );

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category_id, None);
    assert_eq!(rows[0].actual, 700);
    assert_eq!(rows[0].target, 0);
}

#[test]
fn test_over_time_targets_are_bucket_invariant() {
    let categories = vec![Category::new("groceries", "Groceries", "#16a34a")];
    let entries = vec![entry("groceries", BudgetFlow::Expense, 40000)];
    let transactions = vec![
        expense("t1", Some("groceries"), -10000, 2024, 1, 10),
        expense("t2", Some("groceries"), -30000, 2024, 2, 10),
    ];

    let buckets = compare_budgets_over_time(
        &entries,
        &transactions,
        &categories,
        Granularity::Monthly,
        Granularity::Monthly,
        "EUR",
        &eur_rates(),
    )
    .unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].bucket_key, "2024-01");
    assert_eq!(buckets[0].rows[0].actual, 10000);
    assert_eq!(buckets[1].rows[0].actual, 30000);
    // The full-period target repeats in every bucket.
    assert_eq!(buckets[0].rows[0].target, 40000);
    assert_eq!(buckets[1].rows[0].target, 40000);
}

#[test]
fn test_totals_row() {
    let rows = compare_budgets(
        &[
            entry("a", BudgetFlow::Expense, 10000),
            entry("b", BudgetFlow::Expense, 20000),
        ],
        &[expense("t1", Some("a"), -15000, 2024, 3, 1)],
        &[],
        Granularity::Monthly,
        Granularity::Monthly,
        "EUR",
        &eur_rates(),
    );

    let totals = summarize_budgets(&rows);
    assert_eq!(totals.target, 30000);
    assert_eq!(totals.actual, 15000);
    assert_eq!(totals.remaining, 15000);
    assert_eq!(totals.progress.unwrap(), dec!(50.00));
}
