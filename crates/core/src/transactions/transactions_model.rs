//! Transaction domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
            TransactionKind::Transfer => "TRANSFER",
        }
    }
}

/// Domain model representing a ledger transaction.
///
/// Transactions are read-only inputs to the reporting engine, already filtered
/// by the caller (date range, accounts, categories, kind, description search)
/// before they reach any calculator.
///
/// `amount` is in integer minor units of the owning account's currency. Its
/// sign encodes direction (positive = credit, negative = debit) independent of
/// `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub kind: TransactionKind,
    pub amount: i64,
    /// Currency of the owning account.
    pub currency: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
