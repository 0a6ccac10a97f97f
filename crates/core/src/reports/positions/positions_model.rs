//! Balance positions models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One bucket of the account-balance time series.
///
/// Balances are cumulative carry-forward values (not period deltas), already
/// converted to the requested currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsBucket {
    pub bucket_key: String,
    pub label: String,
    /// Balance per account ID at the end of this bucket.
    pub balances: HashMap<String, i64>,
    /// Sum of the per-account balances.
    pub total: i64,
}
