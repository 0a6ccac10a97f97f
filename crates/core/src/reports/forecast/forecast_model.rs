//! Forecast models.

use serde::{Deserialize, Serialize};

/// One point of a balance forecast series.
///
/// Realized buckets carry both the actual total and the trend-line value so
/// the two can be charted against each other; projected buckets carry only
/// the forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastBucket {
    pub bucket_key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<i64>,
    pub forecast: i64,
}
