//! # taskplan-breakdown
//!
//! Turns a free-text project description into a structured work breakdown:
//! requirement extraction, keyword-based complexity classification, and
//! generation of a dependency-ordered subtask list.
//!
//! All three engines are pure functions over their inputs. Construct them
//! once and share them freely; nothing here holds mutable state.

pub mod classifier;
pub mod extractor;
pub mod generator;
pub mod templates;

pub use classifier::{
    classify_complexity, ComplexityAssessment, ComplexityClassifier, ComplexityLevel,
    ComplexityScores,
};
pub use extractor::{extract_requirements, MatchRule, Requirement, RequirementExtractor};
pub use generator::{generate_breakdown, BreakdownGenerator, BreakdownResult, WEB_DEVELOPMENT};
