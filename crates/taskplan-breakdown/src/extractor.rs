//! Requirement extraction from free-text project descriptions

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Phrases whose presence marks a line as a requirement
const REQUIREMENT_PHRASES: &[&str] =
    &["must have", "must include", "should have", "needs to", "require"];

/// Extraction rule that matched a requirement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Leading `-`, `*`, `•`, or `<digits>.` marker
    ListMarker,
    /// Line contains one of the requirement phrases
    Phrase,
}

/// A requirement statement pulled out of the raw description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub text: String,
    pub rule: MatchRule,
}

/// Extracts requirement statements from a multi-line description
///
/// Runs two independent passes over the non-blank trimmed lines: list-marker
/// lines (marker stripped) followed by phrase-matching lines (kept whole).
/// A line caught by both passes appears twice in the output; that
/// duplication is deliberate and downstream stages preserve it.
#[derive(Debug)]
pub struct RequirementExtractor {
    list_marker: Regex,
}

impl Default for RequirementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementExtractor {
    pub fn new() -> Self {
        Self {
            list_marker: Regex::new(r"^[-*•]\s+|^\d+\.\s+").expect("valid list marker pattern"),
        }
    }

    /// Extract requirements in line order, pass 1 results before pass 2.
    ///
    /// Total over any input; an empty description yields an empty list.
    pub fn extract(&self, description: &str) -> Vec<Requirement> {
        let lines: Vec<&str> = description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut requirements = Vec::new();

        // Pass 1: bulleted/numbered items, marker stripped
        for line in &lines {
            if self.list_marker.is_match(line) {
                requirements.push(Requirement {
                    text: self.list_marker.replace(line, "").into_owned(),
                    rule: MatchRule::ListMarker,
                });
            }
        }

        // Pass 2: phrase-style requirements, full line kept
        for line in &lines {
            let lower = line.to_lowercase();
            if REQUIREMENT_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
                requirements.push(Requirement {
                    text: (*line).to_string(),
                    rule: MatchRule::Phrase,
                });
            }
        }

        requirements
    }
}

/// Extract requirements using a freshly constructed extractor
pub fn extract_requirements(description: &str) -> Vec<Requirement> {
    RequirementExtractor::new().extract(description)
}
