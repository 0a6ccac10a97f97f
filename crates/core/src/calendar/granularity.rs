//! Report bucket granularity and the calendar math attached to it.
//!
//! Bucket keys are plain strings chosen so that lexicographic order equals
//! chronological order. Downstream calculators sort buckets by string
//! comparison instead of re-parsing dates, so that property is load-bearing.

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CalculatorError, Result};

/// Size of a report bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Granularity {
    Daily,
    Monthly,
    Quarterly,
    Yearly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Granularity::Daily => "Daily",
            Granularity::Monthly => "Monthly",
            Granularity::Quarterly => "Quarterly",
            Granularity::Yearly => "Yearly",
        };
        write!(f, "{}", s)
    }
}

impl Granularity {
    /// Sortable bucket key for the bucket containing `date`.
    ///
    /// Formats: `yyyy-MM-dd`, `yyyy-MM`, `yyyy-Qq`, `yyyy`.
    pub fn bucket_key(&self, date: NaiveDate) -> String {
        match self {
            Granularity::Daily => date.format("%Y-%m-%d").to_string(),
            Granularity::Monthly => date.format("%Y-%m").to_string(),
            Granularity::Quarterly => {
                format!("{:04}-Q{}", date.year(), quarter_of(date))
            }
            Granularity::Yearly => format!("{:04}", date.year()),
        }
    }

    /// First calendar day of the bucket containing `date`.
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => date,
            // day 1 always exists
            Granularity::Monthly => date.with_day(1).unwrap_or(date),
            Granularity::Quarterly => {
                let first_month = (quarter_of(date) - 1) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap_or(date)
            }
            Granularity::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// Parses a bucket key back into the bucket's start date.
    ///
    /// A key that does not match this granularity's format is a programming
    /// error upstream, reported as [`CalculatorError::MalformedBucketKey`].
    pub fn parse_key(&self, key: &str) -> Result<NaiveDate> {
        let parsed = match self {
            Granularity::Daily => NaiveDate::parse_from_str(key, "%Y-%m-%d").ok(),
            Granularity::Monthly => key.split_once('-').and_then(|(y, m)| {
                let year: i32 = y.parse().ok()?;
                let month: u32 = m.parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, 1)
            }),
            Granularity::Quarterly => key.split_once("-Q").and_then(|(y, q)| {
                let year: i32 = y.parse().ok()?;
                let quarter: u32 = q.parse().ok()?;
                if !(1..=4).contains(&quarter) {
                    return None;
                }
                NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1)
            }),
            Granularity::Yearly => key
                .parse::<i32>()
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        };

        parsed.ok_or_else(|| {
            CalculatorError::MalformedBucketKey {
                key: key.to_string(),
                granularity: self.to_string(),
            }
            .into()
        })
    }

    /// Human display label for a bucket key (e.g. `2024-03` -> `Mar 2024`).
    pub fn display_label(&self, key: &str) -> Result<String> {
        let start = self.parse_key(key)?;
        Ok(match self {
            Granularity::Daily => start.format("%b %d, %Y").to_string(),
            Granularity::Monthly => start.format("%b %Y").to_string(),
            Granularity::Quarterly => format!("Q{} {}", quarter_of(start), start.year()),
            Granularity::Yearly => format!("{}", start.year()),
        })
    }

    /// Start date of the bucket following the one that starts at `date`.
    pub fn advance(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => date
                .checked_add_days(Days::new(1))
                .unwrap_or(NaiveDate::MAX),
            Granularity::Monthly => date
                .checked_add_months(Months::new(1))
                .unwrap_or(NaiveDate::MAX),
            Granularity::Quarterly => date
                .checked_add_months(Months::new(3))
                .unwrap_or(NaiveDate::MAX),
            Granularity::Yearly => date
                .checked_add_months(Months::new(12))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Factor converting a per-bucket amount at this granularity into its
    /// monthly equivalent.
    ///
    /// Daily is not a budget granularity; it maps to 1 and the budget
    /// normalizer warns when asked to rescale with it.
    pub fn to_monthly_factor(&self) -> Decimal {
        match self {
            Granularity::Daily => Decimal::ONE,
            Granularity::Monthly => Decimal::ONE,
            Granularity::Quarterly => Decimal::ONE / dec!(3),
            Granularity::Yearly => Decimal::ONE / dec!(12),
        }
    }

    /// Factor converting a monthly amount into this granularity's per-bucket
    /// equivalent. Inverse direction of [`Granularity::to_monthly_factor`].
    pub fn from_monthly_factor(&self) -> Decimal {
        match self {
            Granularity::Daily => Decimal::ONE,
            Granularity::Monthly => Decimal::ONE,
            Granularity::Quarterly => dec!(3),
            Granularity::Yearly => dec!(12),
        }
    }
}

/// Multiplier rescaling a per-bucket amount from `stored` granularity to
/// `requested` granularity. Identity when the two are equal.
pub fn rescale_multiplier(stored: Granularity, requested: Granularity) -> Decimal {
    if stored == requested {
        return Decimal::ONE;
    }
    stored.to_monthly_factor() * requested.from_monthly_factor()
}

fn quarter_of(date: NaiveDate) -> u32 {
    (date.month0() / 3) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_bucket_keys_per_granularity() {
        let date = d(2024, 8, 5);
        assert_eq!(Granularity::Daily.bucket_key(date), "2024-08-05");
        assert_eq!(Granularity::Monthly.bucket_key(date), "2024-08");
        assert_eq!(Granularity::Quarterly.bucket_key(date), "2024-Q3");
        assert_eq!(Granularity::Yearly.bucket_key(date), "2024");
    }

    #[test]
    fn test_monthly_keys_sort_chronologically() {
        let mut dates = vec![d(2024, 11, 3), d(2024, 2, 29), d(2024, 7, 1)];
        let mut keys: Vec<String> = dates
            .iter()
            .map(|&dt| Granularity::Monthly.bucket_key(dt))
            .collect();
        dates.sort();
        keys.sort();
        let sorted_keys: Vec<String> = dates
            .iter()
            .map(|&dt| Granularity::Monthly.bucket_key(dt))
            .collect();
        assert_eq!(keys, sorted_keys);
    }

    #[test]
    fn test_parse_key_round_trips_bucket_start() {
        let date = d(2023, 11, 17);
        for granularity in [
            Granularity::Daily,
            Granularity::Monthly,
            Granularity::Quarterly,
            Granularity::Yearly,
        ] {
            let key = granularity.bucket_key(date);
            let start = granularity.parse_key(&key).unwrap();
            assert_eq!(start, granularity.bucket_start(date));
            assert_eq!(granularity.bucket_key(start), key);
        }
    }

    #[test]
    fn test_parse_key_rejects_malformed_input() {
        assert!(Granularity::Monthly.parse_key("garbage").is_err());
        assert!(Granularity::Quarterly.parse_key("2024-Q5").is_err());
        assert!(Granularity::Daily.parse_key("2024-13-40").is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            Granularity::Monthly.display_label("2024-03").unwrap(),
            "Mar 2024"
        );
        assert_eq!(
            Granularity::Quarterly.display_label("2024-Q1").unwrap(),
            "Q1 2024"
        );
        assert_eq!(Granularity::Yearly.display_label("2024").unwrap(), "2024");
        assert_eq!(
            Granularity::Daily.display_label("2024-03-09").unwrap(),
            "Mar 09, 2024"
        );
    }

    #[test]
    fn test_advance_crosses_boundaries() {
        assert_eq!(
            Granularity::Monthly.advance(d(2024, 12, 1)),
            d(2025, 1, 1)
        );
        assert_eq!(
            Granularity::Quarterly.advance(d(2024, 10, 1)),
            d(2025, 1, 1)
        );
        assert_eq!(Granularity::Yearly.advance(d(2024, 1, 1)), d(2025, 1, 1));
        assert_eq!(Granularity::Daily.advance(d(2024, 2, 29)), d(2024, 3, 1));
    }

    #[test]
    fn test_rescale_multiplier_identity_and_cross() {
        assert_eq!(
            rescale_multiplier(Granularity::Monthly, Granularity::Monthly),
            Decimal::ONE
        );
        // yearly 1200 -> quarterly 300, within decimal division precision
        let m = rescale_multiplier(Granularity::Yearly, Granularity::Quarterly);
        assert_eq!((Decimal::from(1200) * m).round(), Decimal::from(300));
        // monthly 100 -> yearly 1200
        let m = rescale_multiplier(Granularity::Monthly, Granularity::Yearly);
        assert_eq!(Decimal::from(100) * m, Decimal::from(1200));
    }
}
