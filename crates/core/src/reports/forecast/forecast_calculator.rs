//! Linear balance extrapolation from a realized positions series.
//!
//! This is intentionally a plain average-of-deltas trend, not a statistical
//! model; downstream consumers assert this exact formula.

use rust_decimal::Decimal;

use super::forecast_model::ForecastBucket;
use crate::calendar::Granularity;
use crate::errors::Result;
use crate::fx::round_minor_units;
use crate::reports::positions::PositionsBucket;

/// Number of projected buckets appended after the realized series.
pub fn forecast_horizon(granularity: Granularity) -> usize {
    match granularity {
        Granularity::Daily => 31,
        Granularity::Monthly => 12,
        Granularity::Quarterly => 9,
        Granularity::Yearly => 6,
    }
}

/// Mean of the consecutive bucket-total deltas. A series with fewer than two
/// buckets has no trend and yields zero.
fn average_delta(totals: &[i64]) -> Decimal {
    if totals.len() <= 1 {
        return Decimal::ZERO;
    }
    let delta_sum: i64 = totals.windows(2).map(|pair| pair[1] - pair[0]).sum();
    Decimal::from(delta_sum) / Decimal::from(totals.len() as u64 - 1)
}

/// Extends a realized positions series with a straight trend line.
///
/// Realized buckets get `forecast = total[0] + average_delta * i` overlaid on
/// their actual totals; then `forecast_horizon` future buckets are appended
/// with `forecast = max(0, last_total + average_delta * k)`. Projections are
/// floor-clamped at zero even though realized balances may go negative.
pub fn extrapolate_balances(
    positions: &[PositionsBucket],
    granularity: Granularity,
) -> Result<Vec<ForecastBucket>> {
    let Some(last) = positions.last() else {
        return Ok(Vec::new());
    };

    let totals: Vec<i64> = positions.iter().map(|b| b.total).collect();
    let delta = average_delta(&totals);
    let first_total = Decimal::from(totals[0]);
    let last_total = Decimal::from(last.total);

    let mut series: Vec<ForecastBucket> = positions
        .iter()
        .enumerate()
        .map(|(i, bucket)| ForecastBucket {
            bucket_key: bucket.bucket_key.clone(),
            label: bucket.label.clone(),
            actual: Some(bucket.total),
            forecast: round_minor_units(first_total + delta * Decimal::from(i as u64)),
        })
        .collect();

    let mut cursor = granularity.parse_key(&last.bucket_key)?;
    for k in 1..=forecast_horizon(granularity) {
        cursor = granularity.advance(cursor);
        let bucket_key = granularity.bucket_key(cursor);
        let label = granularity.display_label(&bucket_key)?;
        let projected = round_minor_units(last_total + delta * Decimal::from(k as u64));
        series.push(ForecastBucket {
            bucket_key,
            label,
            actual: None,
            forecast: projected.max(0),
        });
    }

    Ok(series)
}
