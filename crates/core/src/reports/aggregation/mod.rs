//! Transaction aggregation - category breakdowns and bucketed series.

mod aggregation_calculator;
mod aggregation_model;

pub use aggregation_calculator::{
    aggregate_by_bucket, aggregate_by_category, aggregate_income_expenses, summarize_period,
};
pub(crate) use aggregation_calculator::bucket_category_magnitudes;
pub use aggregation_model::{BucketTotal, CategorySummary, IncomeExpenseBucket, PeriodSummary};

#[cfg(test)]
mod aggregation_calculator_tests;
