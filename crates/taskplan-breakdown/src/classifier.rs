//! Keyword-based complexity classification

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const SIMPLE_KEYWORDS: &[&str] = &["basic", "simple", "static", "minimal", "standard"];
const MEDIUM_KEYWORDS: &[&str] = &["responsive", "interactive", "dynamic", "moderate", "custom"];
const COMPLEX_KEYWORDS: &[&str] =
    &["advanced", "complex", "animated", "integration", "api", "database"];

/// Overall complexity level, declared in tie-break priority order
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Simple,
    #[default]
    Medium,
    Complex,
}

impl ComplexityLevel {
    /// All levels, highest tie-break priority first
    pub const ALL: [Self; 3] = [Self::Simple, Self::Medium, Self::Complex];
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Medium => write!(f, "medium"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

impl std::str::FromStr for ComplexityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "medium" => Ok(Self::Medium),
            "complex" => Ok(Self::Complex),
            _ => Err(format!("Invalid complexity level: {}", s)),
        }
    }
}

/// Per-level keyword hit counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityScores {
    pub simple: u32,
    pub medium: u32,
    pub complex: u32,
}

impl ComplexityScores {
    pub fn get(&self, level: ComplexityLevel) -> u32 {
        match level {
            ComplexityLevel::Simple => self.simple,
            ComplexityLevel::Medium => self.medium,
            ComplexityLevel::Complex => self.complex,
        }
    }

    fn set(&mut self, level: ComplexityLevel, count: u32) {
        match level {
            ComplexityLevel::Simple => self.simple = count,
            ComplexityLevel::Medium => self.medium = count,
            ComplexityLevel::Complex => self.complex = count,
        }
    }

    fn total(&self) -> u32 {
        self.simple + self.medium + self.complex
    }
}

/// Outcome of classifying a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    pub level: ComplexityLevel,
    pub scores: ComplexityScores,
    /// Whole-word tokens from the text that equal a keyword; reported for
    /// display only, never used in the decision
    pub matched_tokens: BTreeSet<String>,
}

/// Scores a description against three fixed keyword sets
///
/// Each level's score counts how many of its keywords occur as substrings
/// of the lowercased text. Zero everywhere defaults to medium; otherwise
/// the strictly highest score wins and ties fall to the earlier level in
/// priority order (simple, then medium, then complex).
#[derive(Debug)]
pub struct ComplexityClassifier {
    keyword_sets: [(ComplexityLevel, &'static [&'static str]); 3],
}

impl Default for ComplexityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityClassifier {
    pub fn new() -> Self {
        Self {
            keyword_sets: [
                (ComplexityLevel::Simple, SIMPLE_KEYWORDS),
                (ComplexityLevel::Medium, MEDIUM_KEYWORDS),
                (ComplexityLevel::Complex, COMPLEX_KEYWORDS),
            ],
        }
    }

    /// Classify a description. Total over any input, including empty text.
    pub fn classify(&self, description: &str) -> ComplexityAssessment {
        let lower = description.to_lowercase();

        let mut scores = ComplexityScores::default();
        for (level, keywords) in &self.keyword_sets {
            let hits = keywords.iter().filter(|keyword| lower.contains(*keyword)).count() as u32;
            scores.set(*level, hits);
        }

        let mut level = ComplexityLevel::Medium;
        if scores.total() > 0 {
            let mut best = 0;
            for candidate in ComplexityLevel::ALL {
                // strict comparison keeps the earlier level on ties
                if scores.get(candidate) > best {
                    best = scores.get(candidate);
                    level = candidate;
                }
            }
        }

        let matched_tokens = lower
            .split_whitespace()
            .filter(|token| self.keyword_sets.iter().any(|(_, keywords)| keywords.contains(token)))
            .map(str::to_string)
            .collect();

        ComplexityAssessment { level, scores, matched_tokens }
    }
}

/// Classify using a freshly constructed classifier
pub fn classify_complexity(description: &str) -> ComplexityAssessment {
    ComplexityClassifier::new().classify(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_defaults_to_medium() {
        let assessment = classify_complexity("");

        assert_eq!(assessment.level, ComplexityLevel::Medium);
        assert_eq!(assessment.scores, ComplexityScores::default());
        assert!(assessment.matched_tokens.is_empty());
    }

    #[test]
    fn test_no_keywords_defaults_to_medium() {
        let assessment = classify_complexity("a landing page for a bakery");
        assert_eq!(assessment.level, ComplexityLevel::Medium);
        assert_eq!(assessment.scores.total(), 0);
    }

    #[test]
    fn test_simple_keywords_win() {
        let assessment = classify_complexity("simple basic static page");

        assert_eq!(assessment.level, ComplexityLevel::Simple);
        assert_eq!(assessment.scores.simple, 3);
        assert_eq!(assessment.scores.medium, 0);
        assert_eq!(assessment.scores.complex, 0);
    }

    #[test]
    fn test_complex_keywords_win() {
        let assessment = classify_complexity("advanced api with database integration");
        assert_eq!(assessment.level, ComplexityLevel::Complex);
        assert_eq!(assessment.scores.complex, 4);
    }

    #[test]
    fn test_tie_falls_to_earlier_priority_level() {
        // one simple keyword, one complex keyword
        let assessment = classify_complexity("basic database work");

        assert_eq!(assessment.scores.simple, 1);
        assert_eq!(assessment.scores.complex, 1);
        assert_eq!(assessment.level, ComplexityLevel::Simple);
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        // "databases" still counts for "database"
        let assessment = classify_complexity("several databases");
        assert_eq!(assessment.scores.complex, 1);
        assert_eq!(assessment.level, ComplexityLevel::Complex);
    }

    #[test]
    fn test_each_keyword_counts_once() {
        let assessment = classify_complexity("basic basic basic");
        assert_eq!(assessment.scores.simple, 1);
    }

    #[test]
    fn test_matched_tokens_require_exact_words() {
        let assessment = classify_complexity("simple databases");

        // "databases" scored via substring match but is not itself a keyword
        assert!(assessment.matched_tokens.contains("simple"));
        assert!(!assessment.matched_tokens.contains("databases"));
    }

    #[test]
    fn test_level_display_round_trip() {
        for level in ComplexityLevel::ALL {
            let parsed: ComplexityLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }
}
