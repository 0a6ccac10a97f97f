//! Account balance reconstruction as a carry-forward time series.

use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

use super::positions_model::PositionsBucket;
use crate::accounts::Account;
use crate::calendar::Granularity;
use crate::errors::Result;
use crate::fx::{convert_amount, RateSet};
use crate::transactions::Transaction;

/// Reconstructs per-account balance series by carrying forward previous
/// bucket balances and applying each bucket's transactions, then converts and
/// totals in the target currency.
///
/// Balances are computed over all transactions up to the requested end:
/// carry-forward depends on history, so `window` only selects which buckets
/// are returned, after every bucket's balance has been computed. Conversion
/// happens after the carry-forward arithmetic, at the latest rate: a
/// cumulative sum does not commute with time-varying conversion, so the
/// moment of conversion is fixed to read time.
pub fn build_positions(
    transactions: &[Transaction],
    accounts: &[Account],
    granularity: Granularity,
    target_currency: &str,
    rates: &RateSet,
    window: Option<(NaiveDate, NaiveDate)>,
) -> Result<Vec<PositionsBucket>> {
    let window_end = window.map(|(_, end)| end);

    // Transactions after the requested end never influence returned buckets.
    let relevant: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| window_end.map_or(true, |end| tx.date <= end))
        .collect();

    if relevant.is_empty() {
        return Ok(Vec::new());
    }

    let account_index: HashMap<&str, &Account> =
        accounts.iter().map(|a| (a.id.as_str(), a)).collect();

    // Native-currency transaction sums per bucket key per account.
    let mut bucket_sums: HashMap<String, HashMap<&str, i64>> = HashMap::new();
    let mut first_date = relevant[0].date;
    let mut last_date = relevant[0].date;
    for tx in &relevant {
        if !account_index.contains_key(tx.account_id.as_str()) {
            debug!("Transaction {} references unknown account {}", tx.id, tx.account_id);
            continue;
        }
        first_date = first_date.min(tx.date);
        last_date = last_date.max(tx.date);
        *bucket_sums
            .entry(granularity.bucket_key(tx.date))
            .or_default()
            .entry(tx.account_id.as_str())
            .or_insert(0) += tx.amount;
    }

    // Contiguous bucket walk from the first transaction's bucket to the later
    // of the last transaction's bucket and the requested end, so carry-forward
    // has no gaps.
    let range_end = window_end.map_or(last_date, |end| end.max(last_date));
    let end_key = granularity.bucket_key(range_end);

    let mut native_balances: HashMap<&str, i64> = accounts
        .iter()
        .map(|a| (a.id.as_str(), a.initial_balance))
        .collect();

    let window_keys =
        window.map(|(start, end)| (granularity.bucket_key(start), granularity.bucket_key(end)));

    let mut series: Vec<PositionsBucket> = Vec::new();
    let mut cursor = granularity.bucket_start(first_date);

    loop {
        let key = granularity.bucket_key(cursor);

        if let Some(sums) = bucket_sums.get(&key) {
            for (account_id, sum) in sums {
                if let Some(balance) = native_balances.get_mut(account_id) {
                    *balance += sum;
                }
            }
        }

        let in_window = window_keys
            .as_ref()
            .map_or(true, |(start, end)| key >= *start && key <= *end);

        if in_window {
            let mut balances: HashMap<String, i64> = HashMap::new();
            let mut total: i64 = 0;
            for account in accounts {
                let native = native_balances
                    .get(account.id.as_str())
                    .copied()
                    .unwrap_or(account.initial_balance);
                let converted =
                    convert_amount(native, &account.currency, target_currency, rates);
                total += converted;
                balances.insert(account.id.clone(), converted);
            }

            series.push(PositionsBucket {
                label: granularity.display_label(&key)?,
                bucket_key: key.clone(),
                balances,
                total,
            });
        }

        if key == end_key {
            break;
        }
        cursor = granularity.advance(cursor);
    }

    Ok(series)
}
