//! # taskplan-costing
//!
//! Cost and timeline estimation over a generated subtask list: an
//! immutable hourly [`RateTable`] keyed by experience tier and region, and
//! a [`CostEstimator`] applying a fixed 20% contingency buffer and an
//! 8-hour day / 5-day week timeline.

pub mod estimator;
pub mod rates;

pub use estimator::{estimate_cost, CostEstimate, CostEstimator, SubtaskCost};
pub use rates::RateTable;
