//! Calendar module - bucket granularities and date bucketing.

mod granularity;

pub use granularity::{rescale_multiplier, Granularity};
