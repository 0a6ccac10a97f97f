//! Account domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing an account in the system.
///
/// Accounts are read-only inputs to the reporting engine. All monetary fields
/// are integer minor units (cents) in the account's own currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    /// ISO-4217-style currency code (e.g. "EUR", "USD").
    pub currency: String,
    /// Balance the account was opened with, before any recorded transaction.
    pub initial_balance: i64,
    /// Current balance. Maintained by the storage layer as
    /// `initial_balance + sum(non-deleted transaction amounts)`.
    pub balance: i64,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        currency: impl Into<String>,
        initial_balance: i64,
        balance: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            currency: currency.into(),
            initial_balance,
            balance,
        }
    }
}
