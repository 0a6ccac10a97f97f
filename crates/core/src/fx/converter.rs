//! The single amount converter shared by every calculator.
//!
//! All cross-currency conversion pivots through the reference currency:
//! there is no pairwise rate table, only reference->X rates, so converting
//! composes two reference-relative rates. Rounding is
//! round-half-away-from-zero everywhere; call sites must not re-round.

use log::warn;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::fx_model::RateSet;

/// Converts an integer minor-unit amount from `from` currency to `to`
/// currency via the reference-currency pivot.
///
/// Same-currency conversion returns the input unchanged, with no rounding
/// drift. Unknown currencies carry an implicit rate of 1.0 (see
/// [`RateSet::rate_of`]), which makes the conversion a silent no-op.
pub fn convert_amount(amount: i64, from: &str, to: &str, rates: &RateSet) -> i64 {
    if from == to {
        return amount;
    }

    let from_rate = rates.rate_of(from);
    let to_rate = rates.rate_of(to);

    if from_rate.is_zero() {
        warn!(
            "Zero rate for {}; leaving amount unconverted ({} -> {})",
            from, from, to
        );
        return amount;
    }

    round_minor_units(Decimal::from(amount) * to_rate / from_rate)
}

/// Rounds a decimal amount to integer minor units, half away from zero,
/// saturating at the i64 bounds.
pub(crate) fn round_minor_units(value: Decimal) -> i64 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    match rounded.to_i64() {
        Some(v) => v,
        None => {
            warn!("Minor-unit amount {} overflows i64; saturating", rounded);
            if rounded.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    }
}
