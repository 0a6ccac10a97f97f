//! FX (Foreign Exchange) module - rate resolution and amount conversion.

mod converter;
mod fx_model;
mod fx_service;
mod fx_traits;

pub use converter::convert_amount;
pub(crate) use converter::round_minor_units;
pub use fx_model::{reference_ticker, RateQuote, RateSet};
pub use fx_service::FxService;
pub use fx_traits::{FxRepositoryTrait, FxServiceTrait};
