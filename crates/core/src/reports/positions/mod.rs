//! Balance positions - carry-forward account balance time series.

mod positions_calculator;
mod positions_model;

pub use positions_calculator::build_positions;
pub use positions_model::PositionsBucket;
