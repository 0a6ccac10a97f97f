//! FX domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of an exchange-rate time series.
///
/// The ticker is the reference currency concatenated with the quoted currency
/// (e.g. `EURUSD`), and `close` is the price of one reference unit in the
/// quoted currency on `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    pub ticker: String,
    pub date: NaiveDate,
    pub close: Decimal,
}

/// Builds the time-series ticker for a currency quoted against `reference`.
pub fn reference_ticker(reference: &str, code: &str) -> String {
    format!("{}{}", reference, code)
}

/// Immutable per-request snapshot of resolved exchange rates.
///
/// Each entry is the price of one reference-currency unit in the keyed
/// currency. The reference currency itself is implicit and always 1.0.
/// Lookups for currencies missing from the set fail open to 1.0, a
/// deliberate availability-over-correctness trade so that accounts with no
/// rate data never break a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSet {
    reference: String,
    rates: HashMap<String, Decimal>,
}

impl RateSet {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            rates: HashMap::new(),
        }
    }

    /// The currency every rate in this set is quoted against.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn insert(&mut self, code: impl Into<String>, rate: Decimal) {
        self.rates.insert(code.into(), rate);
    }

    /// Price of one reference unit in `code` units.
    ///
    /// Returns exactly 1.0 for the reference currency, and falls back to 1.0
    /// for currencies that were never resolved.
    pub fn rate_of(&self, code: &str) -> Decimal {
        if code == self.reference {
            return Decimal::ONE;
        }
        self.rates.get(code).copied().unwrap_or(Decimal::ONE)
    }

    /// Whether `code` has an explicitly resolved rate (the reference currency
    /// counts as resolved).
    pub fn is_resolved(&self, code: &str) -> bool {
        code == self.reference || self.rates.contains_key(code)
    }
}
