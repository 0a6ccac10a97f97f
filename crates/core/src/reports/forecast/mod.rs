//! Balance forecasting - linear extrapolation of the positions series.

mod forecast_calculator;
mod forecast_model;

pub use forecast_calculator::{extrapolate_balances, forecast_horizon};
pub use forecast_model::ForecastBucket;
