//! FX traits - contracts between the engine, the rate store, and callers.

use super::fx_model::{RateQuote, RateSet};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Trait defining the contract for exchange-rate storage lookups.
///
/// Implemented by the storage layer. Lookup failures should be mapped to
/// [`crate::errors::Error::Repository`]; the service degrades them to the
/// fail-open default rather than propagating.
#[async_trait]
pub trait FxRepositoryTrait: Send + Sync {
    /// Most recent close row for `ticker` with `date <= as_of`, if any.
    async fn get_latest_quote(&self, ticker: &str, as_of: NaiveDate) -> Result<Option<RateQuote>>;
}

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Resolves each currency in `currencies` to its price relative to the
    /// reference currency, using the most recent available rate as of `as_of`.
    ///
    /// Never fails: a missing or unreadable rate degrades to 1.0 in the
    /// returned set, and the fallback is logged.
    async fn resolve_rates(&self, currencies: &HashSet<String>, as_of: NaiveDate) -> RateSet;

    /// The fixed reference currency rates are quoted against.
    fn reference_currency(&self) -> &str;
}
