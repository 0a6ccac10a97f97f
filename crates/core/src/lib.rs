//! Moneta Core - the reporting engine behind the Moneta finance tracker.
//!
//! This crate turns raw ledger snapshots (transactions in heterogeneous
//! currencies, budget targets stored at a fixed granularity) into consistent,
//! comparable numeric series: category breakdowns, income/expense buckets,
//! account-balance time series, budget-vs-actual comparisons, and balance
//! forecasts. It is storage-agnostic: rate lookups go through a repository
//! trait implemented elsewhere, and every other input arrives as an in-memory
//! snapshot fetched by the caller.

pub mod accounts;
pub mod calendar;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod reports;
pub mod transactions;

// Re-export common types from the report modules
pub use reports::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
