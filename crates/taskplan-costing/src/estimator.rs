//! Cost and timeline estimation over a subtask list

use crate::rates::RateTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use taskplan_core::{ExperienceTier, PlanningError, Region, Result, Subtask};
use tracing::debug;

/// Contingency multiplier applied to summed hours
const BUFFER: f64 = 1.2;
const HOURS_PER_DAY: f64 = 8.0;
const DAYS_PER_WEEK: f64 = 5.0;

/// Hours and cost attributed to a single subtask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskCost {
    pub name: String,
    pub hours: f64,
    pub cost: f64,
}

/// Complete cost and timeline estimate for a breakdown
///
/// Derived purely from the subtask list and the rate table; holds no
/// reference back to the breakdown it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Per-subtask hours and cost, in breakdown order
    pub task_breakdown: Vec<SubtaskCost>,
    pub total_hours: f64,
    /// Total hours with the 20% contingency applied
    pub buffered_hours: f64,
    /// Buffered hours priced at the hourly rate
    pub total_cost: f64,
    pub timeline_weeks: f64,
    pub hourly_rate: u32,
    pub tier: ExperienceTier,
    pub region: Region,
}

impl CostEstimate {
    /// Presentation contract: hours rendered with no decimal places,
    /// e.g. "9 hours (+ 20% buffer = 11 hours)"
    pub fn hours_summary(&self) -> String {
        format!(
            "{:.0} hours (+ 20% buffer = {:.0} hours)",
            self.total_hours, self.buffered_hours
        )
    }

    /// Presentation contract: whole-dollar cost, e.g. "$432"
    pub fn cost_display(&self) -> String {
        format!("${:.0}", self.total_cost)
    }

    /// Presentation contract: one decimal place, e.g. "0.3 weeks"
    pub fn timeline_display(&self) -> String {
        format!("{:.1} weeks", self.timeline_weeks)
    }

    /// Presentation contract: integer rate with currency, e.g. "$40/hour"
    pub fn rate_display(&self) -> String {
        format!("${}/hour", self.hourly_rate)
    }
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimate for {} developer, {}", self.tier, self.region)?;
        writeln!(f, "  Rate: {}", self.rate_display())?;
        writeln!(f, "  Hours: {}", self.hours_summary())?;
        writeln!(f, "  Cost: {}", self.cost_display())?;
        writeln!(f, "  Timeline: {}", self.timeline_display())?;
        writeln!(f)?;
        writeln!(f, "Task Costs:")?;
        for task in &self.task_breakdown {
            writeln!(f, "  {} - {:.1} hours, ${:.0}", task.name, task.hours, task.cost)?;
        }
        Ok(())
    }
}

/// Prices a subtask list against the rate table
#[derive(Debug, Default)]
pub struct CostEstimator {
    rates: RateTable,
}

impl CostEstimator {
    pub fn new() -> Self {
        Self { rates: RateTable::new() }
    }

    /// Estimate total cost and timeline for the given subtasks.
    ///
    /// The (tier, region) pair is resolved before any computation; an
    /// unsupported combination fails immediately with both values named.
    /// Reads the subtasks without altering them.
    pub fn estimate(&self, subtasks: &[Subtask], tier: &str, region: &str) -> Result<CostEstimate> {
        let (tier, region, hourly_rate) = self.resolve_rate(tier, region)?;
        let rate = f64::from(hourly_rate);

        let mut task_breakdown = Vec::with_capacity(subtasks.len());
        let mut total_hours = 0.0;
        for subtask in subtasks {
            let hours = parse_hours(&subtask.name, &subtask.estimated_hours)?;
            task_breakdown.push(SubtaskCost {
                name: subtask.name.clone(),
                hours,
                cost: hours * rate,
            });
            total_hours += hours;
        }

        let buffered_hours = total_hours * BUFFER;
        let total_cost = buffered_hours * rate;
        let timeline_weeks = buffered_hours / HOURS_PER_DAY / DAYS_PER_WEEK;

        debug!(total_hours, buffered_hours, total_cost, "estimated project cost");

        Ok(CostEstimate {
            task_breakdown,
            total_hours,
            buffered_hours,
            total_cost,
            timeline_weeks,
            hourly_rate,
            tier,
            region,
        })
    }

    fn resolve_rate(&self, tier: &str, region: &str) -> Result<(ExperienceTier, Region, u32)> {
        let unsupported = || PlanningError::UnsupportedRate {
            tier: tier.to_string(),
            region: region.to_string(),
        };

        let parsed_tier: ExperienceTier = tier.parse().map_err(|_| unsupported())?;
        let parsed_region: Region = region.parse().map_err(|_| unsupported())?;
        let rate = self.rates.rate(parsed_tier, parsed_region).ok_or_else(unsupported)?;
        Ok((parsed_tier, parsed_region, rate))
    }
}

/// Parses an hour estimate: "min-max" becomes the mean of the bounds, a
/// single number is used directly
fn parse_hours(subtask: &str, raw: &str) -> Result<f64> {
    let malformed = || PlanningError::MalformedHours {
        subtask: subtask.to_string(),
        raw: raw.to_string(),
    };

    match raw.split_once('-') {
        Some((min, max)) => {
            let min: f64 = min.trim().parse().map_err(|_| malformed())?;
            let max: f64 = max.trim().parse().map_err(|_| malformed())?;
            Ok((min + max) / 2.0)
        }
        None => raw.trim().parse().map_err(|_| malformed()),
    }
}

/// Estimate using a freshly constructed estimator and the built-in rates
pub fn estimate_cost(subtasks: &[Subtask], tier: &str, region: &str) -> Result<CostEstimate> {
    CostEstimator::new().estimate(subtasks, tier, region)
}
