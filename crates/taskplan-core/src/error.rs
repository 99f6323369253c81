//! Unified error types for planning and estimation

use thiserror::Error;

/// Unified error type for all planning operations
///
/// Extraction, classification, and breakdown generation are total functions
/// and never produce these; only cost estimation can fail.
#[derive(Error, Debug)]
pub enum PlanningError {
    // Rate lookup errors
    #[error("unsupported tier or region: {tier} / {region}")]
    UnsupportedRate { tier: String, region: String },

    // Hour estimate parsing errors
    #[error("subtask '{subtask}' has malformed estimated hours '{raw}'")]
    MalformedHours { subtask: String, raw: String },
}

/// Result type alias using PlanningError
pub type Result<T> = std::result::Result<T, PlanningError>;
