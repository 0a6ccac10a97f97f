//! Unit tests for the aggregation calculator.

use super::aggregation_calculator::*;
use crate::calendar::Granularity;
use crate::categories::Category;
use crate::constants::UNCATEGORIZED_CATEGORY_NAME;
use crate::fx::RateSet;
use crate::transactions::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn tx(
    id: &str,
    category_id: Option<&str>,
    kind: TransactionKind,
    amount: i64,
    currency: &str,
    y: i32,
    m: u32,
    d: u32,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        account_id: "acc-1".to_string(),
        category_id: category_id.map(|c| c.to_string()),
        kind,
        amount,
        currency: currency.to_string(),
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
fn test_category_breakdown_reports_magnitudes() {
    let categories = vec![
        Category::new("groceries", "Groceries", "#16a34a"),
        Category::new("rent", "Rent", "#dc2626"),
    ];
    let transactions = vec![
        tx("t1", Some("groceries"), TransactionKind::Expense, -2550, "EUR", 2024, 1, 5),
        tx("t2", Some("groceries"), TransactionKind::Expense, -1450, "EUR", 2024, 1, 20),
        tx("t3", Some("rent"), TransactionKind::Expense, -90000, "EUR", 2024, 1, 1),
    ];

    let breakdown =
        aggregate_by_category(&transactions, &categories, "EUR", &eur_rates());

    assert_eq!(breakdown.len(), 2);
    // Sorted descending by magnitude.
    assert_eq!(breakdown[0].name, "Rent");
    assert_eq!(breakdown[0].value, 90000);
    assert_eq!(breakdown[0].count, 1);
    assert_eq!(breakdown[1].name, "Groceries");
    assert_eq!(breakdown[1].value, 4000);
    assert_eq!(breakdown[1].count, 2);
    // Shares sum to 100%.
    assert_eq!(breakdown[0].share.unwrap(), dec!(95.74));
    assert_eq!(breakdown[1].share.unwrap(), dec!(4.26));
}

#[test]
fn test_category_breakdown_uncategorized_sentinel() {
    let transactions = vec![tx(
        "t1", None, TransactionKind::Expense, -500, "EUR", 2024, 2, 2,
    )];

    let breakdown = aggregate_by_category(&transactions, &[], "EUR", &eur_rates());

    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category_id, None);
    assert_eq!(breakdown[0].name, UNCATEGORIZED_CATEGORY_NAME);
    assert_eq!(breakdown[0].color, None);
    assert_eq!(breakdown[0].value, 500);
}

#[test]
fn test_category_breakdown_converts_before_summing() {
    let categories = vec![Category::new("fuel", "Fuel", "#f59e0b")];
    // 20.00 USD at rate 2 USD/EUR -> 10.00 EUR
    let transactions = vec![
        tx("t1", Some("fuel"), TransactionKind::Expense, -2000, "USD", 2024, 3, 3),
        tx("t2", Some("fuel"), TransactionKind::Expense, -1000, "EUR", 2024, 3, 4),
    ];

    let breakdown =
        aggregate_by_category(&transactions, &categories, "EUR", &eur_rates());

    assert_eq!(breakdown[0].value, 2000);
}

#[test]
fn test_empty_input_yields_empty_series() {
    let rates = eur_rates();
    assert!(aggregate_by_category(&[], &[], "EUR", &rates).is_empty());
    assert!(aggregate_by_bucket(&[], Granularity::Monthly, "EUR", &rates)
        .unwrap()
        .is_empty());
    assert!(
        aggregate_income_expenses(&[], Granularity::Monthly, "EUR", &rates)
            .unwrap()
            .is_empty()
    );
    let summary = summarize_period(&[], "EUR", &rates);
    assert_eq!((summary.income, summary.expenses, summary.net), (0, 0, 0));
}

#[test]
fn test_bucketed_totals_sorted_and_labeled() {
    let transactions = vec![
        tx("t1", None, TransactionKind::Expense, -100, "EUR", 2024, 11, 3),
        tx("t2", None, TransactionKind::Income, 300, "EUR", 2024, 2, 29),
        tx("t3", None, TransactionKind::Income, 50, "EUR", 2024, 2, 1),
    ];

    let series =
        aggregate_by_bucket(&transactions, Granularity::Monthly, "EUR", &eur_rates()).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].bucket_key, "2024-02");
    assert_eq!(series[0].label, "Feb 2024");
    assert_eq!(series[0].value, 350);
    assert_eq!(series[1].bucket_key, "2024-11");
    assert_eq!(series[1].value, -100);
}

#[test]
fn test_income_expenses_difference_per_bucket() {
    let transactions = vec![
        tx("t1", None, TransactionKind::Income, 250000, "EUR", 2024, 5, 1),
        tx("t2", None, TransactionKind::Expense, -90000, "EUR", 2024, 5, 3),
        tx("t3", None, TransactionKind::Expense, -10000, "EUR", 2024, 5, 28),
        // Transfers never show up in this report shape.
        tx("t4", None, TransactionKind::Transfer, -50000, "EUR", 2024, 5, 15),
    ];

    let series =
        aggregate_income_expenses(&transactions, Granularity::Monthly, "EUR", &eur_rates())
            .unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].income, 250000);
    assert_eq!(series[0].expenses, 100000);
    assert_eq!(series[0].difference, 150000);
}

#[test]
fn test_period_summary_converts_and_nets() {
    let transactions = vec![
        tx("t1", None, TransactionKind::Income, 250000, "EUR", 2024, 5, 1),
        // -200.00 USD -> -100.00 EUR
        tx("t2", None, TransactionKind::Expense, -20000, "USD", 2024, 5, 3),
    ];

    let summary = summarize_period(&transactions, "EUR", &eur_rates());

    assert_eq!(summary.income, 250000);
    assert_eq!(summary.expenses, 10000);
    assert_eq!(summary.net, 240000);
    assert_eq!(summary.currency, "EUR");
}

#[test]
fn test_expense_magnitudes_never_negative() {
    // A refund makes the signed sum positive; the magnitude stays positive
    // either way.
    let transactions = vec![
        tx("t1", Some("c1"), TransactionKind::Expense, -100, "EUR", 2024, 1, 1),
        tx("t2", Some("c1"), TransactionKind::Expense, 300, "EUR", 2024, 1, 2),
    ];

    let breakdown = aggregate_by_category(&transactions, &[], "EUR", &eur_rates());
    assert_eq!(breakdown[0].value, 200);
}
