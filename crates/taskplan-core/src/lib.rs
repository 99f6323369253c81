//! # taskplan-core
//!
//! Shared domain types for the taskplan work-breakdown and estimation
//! engines.
//!
//! The core vocabulary is small: a [`Subtask`] is one named unit of work
//! with an hour estimate and name-based dependencies on earlier subtasks,
//! an [`ExperienceTier`] and [`Region`] select an hourly rate, and
//! [`PlanningError`] covers the two ways an estimate can fail.

mod error;
mod types;

pub use error::{PlanningError, Result};
pub use types::*;
