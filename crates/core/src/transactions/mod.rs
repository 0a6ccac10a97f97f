//! Transactions module - domain models.

mod transactions_model;

pub use transactions_model::{Transaction, TransactionKind};
