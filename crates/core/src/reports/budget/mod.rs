//! Budget normalization - target rescaling and budget-vs-actual comparisons.

mod budget_calculator;
mod budget_model;

pub use budget_calculator::{
    compare_budgets, compare_budgets_over_time, scale_target, summarize_budgets,
};
pub use budget_model::{
    BudgetBucketComparison, BudgetComparison, BudgetEntry, BudgetFlow, BudgetTotals,
};

#[cfg(test)]
mod budget_calculator_tests;
