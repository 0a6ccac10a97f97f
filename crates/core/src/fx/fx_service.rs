//! FX service - resolves per-request rate snapshots from the rate store.

use super::fx_model::{reference_ticker, RateSet};
use super::fx_traits::{FxRepositoryTrait, FxServiceTrait};
use crate::constants::REFERENCE_CURRENCY;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone)]
pub struct FxService {
    repository: Arc<dyn FxRepositoryTrait>,
    reference_currency: String,
}

impl FxService {
    pub fn new(repository: Arc<dyn FxRepositoryTrait>) -> Self {
        Self {
            repository,
            reference_currency: REFERENCE_CURRENCY.to_string(),
        }
    }

    /// Overrides the reference currency (EUR by default).
    pub fn with_reference_currency(mut self, code: impl Into<String>) -> Self {
        self.reference_currency = code.into();
        self
    }

    /// Looks up one currency, degrading every failure mode to the at-par
    /// default. This is the only place the fail-open rule is applied.
    async fn resolve_one(&self, code: &str, as_of: NaiveDate) -> (String, Decimal) {
        let ticker = reference_ticker(&self.reference_currency, code);

        match self.repository.get_latest_quote(&ticker, as_of).await {
            Ok(Some(quote)) if !quote.close.is_zero() => (code.to_string(), quote.close),
            Ok(Some(quote)) => {
                warn!(
                    "Zero close for {} on {}; treating {} as at par with {}",
                    ticker, quote.date, code, self.reference_currency
                );
                (code.to_string(), Decimal::ONE)
            }
            Ok(None) => {
                warn!(
                    "No exchange rate for {} as of {}; treating {} as at par with {}",
                    ticker, as_of, code, self.reference_currency
                );
                (code.to_string(), Decimal::ONE)
            }
            Err(e) => {
                warn!(
                    "Rate lookup failed for {}: {}; treating {} as at par with {}",
                    ticker, e, code, self.reference_currency
                );
                (code.to_string(), Decimal::ONE)
            }
        }
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn resolve_rates(&self, currencies: &HashSet<String>, as_of: NaiveDate) -> RateSet {
        let mut rates = RateSet::new(&self.reference_currency);

        // The reference currency is implicit 1.0, never looked up. The
        // remaining lookups are independent point-in-time reads, issued
        // concurrently and joined.
        let lookups = currencies
            .iter()
            .filter(|code| code.as_str() != self.reference_currency)
            .map(|code| self.resolve_one(code.as_str(), as_of));

        for (code, rate) in join_all(lookups).await {
            rates.insert(code, rate);
        }

        debug!(
            "Resolved {} rate(s) against {} as of {}",
            currencies.len(),
            self.reference_currency,
            as_of
        );

        rates
    }

    fn reference_currency(&self) -> &str {
        &self.reference_currency
    }
}
