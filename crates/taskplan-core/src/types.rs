//! Core type definitions for work breakdown and cost estimation

use serde::{Deserialize, Serialize};

/// Developer experience tier used for hourly rate lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    Junior,
    Mid,
    Senior,
}

impl std::fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Junior => write!(f, "junior"),
            Self::Mid => write!(f, "mid"),
            Self::Senior => write!(f, "senior"),
        }
    }
}

impl std::str::FromStr for ExperienceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "junior" => Ok(Self::Junior),
            "mid" => Ok(Self::Mid),
            "senior" => Ok(Self::Senior),
            _ => Err(format!("Invalid experience tier: {}", s)),
        }
    }
}

/// Geographic region used for hourly rate lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "US/Canada")]
    UsCanada,
    #[serde(rename = "Western Europe")]
    WesternEurope,
    #[serde(rename = "Eastern Europe")]
    EasternEurope,
    Asia,
    #[serde(rename = "Latin America")]
    LatinAmerica,
    #[serde(rename = "Global Average")]
    GlobalAverage,
}

impl Region {
    /// All supported regions, in rate table order
    pub const ALL: [Self; 6] = [
        Self::UsCanada,
        Self::WesternEurope,
        Self::EasternEurope,
        Self::Asia,
        Self::LatinAmerica,
        Self::GlobalAverage,
    ];
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsCanada => write!(f, "US/Canada"),
            Self::WesternEurope => write!(f, "Western Europe"),
            Self::EasternEurope => write!(f, "Eastern Europe"),
            Self::Asia => write!(f, "Asia"),
            Self::LatinAmerica => write!(f, "Latin America"),
            Self::GlobalAverage => write!(f, "Global Average"),
        }
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us/canada" => Ok(Self::UsCanada),
            "western europe" => Ok(Self::WesternEurope),
            "eastern europe" => Ok(Self::EasternEurope),
            "asia" => Ok(Self::Asia),
            "latin america" => Ok(Self::LatinAmerica),
            "global average" => Ok(Self::GlobalAverage),
            _ => Err(format!("Invalid region: {}", s)),
        }
    }
}

/// Subtask category within a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtaskCategory {
    Setup,
    Design,
    Frontend,
    Testing,
    Deployment,
}

impl std::fmt::Display for SubtaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::Design => write!(f, "design"),
            Self::Frontend => write!(f, "frontend"),
            Self::Testing => write!(f, "testing"),
            Self::Deployment => write!(f, "deployment"),
        }
    }
}

impl std::str::FromStr for SubtaskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "setup" => Ok(Self::Setup),
            "design" => Ok(Self::Design),
            "frontend" => Ok(Self::Frontend),
            "testing" => Ok(Self::Testing),
            "deployment" => Ok(Self::Deployment),
            _ => Err(format!("Invalid subtask category: {}", s)),
        }
    }
}

/// One named unit of work within a breakdown
///
/// Immutable once produced by the generator; the cost estimator reads
/// subtasks but never alters them. Dependencies are weak references by
/// name and always point at a subtask emitted earlier in the same
/// breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub name: String,
    /// Embeds the originating requirement text for requirement-derived
    /// subtasks
    pub description: String,
    pub category: SubtaskCategory,
    /// Names of subtasks that must complete first
    pub dependencies: Vec<String>,
    /// Either a single number ("4") or a range ("2-6")
    pub estimated_hours: String,
    pub complexity_factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_display_round_trip() {
        for tier in [ExperienceTier::Junior, ExperienceTier::Mid, ExperienceTier::Senior] {
            let parsed: ExperienceTier = tier.to_string().parse().unwrap();
            assert_eq!(parsed, tier);
        }
    }

    #[test]
    fn test_tier_rejects_unknown() {
        assert!("lead".parse::<ExperienceTier>().is_err());
    }

    #[test]
    fn test_region_display_round_trip() {
        for region in Region::ALL {
            let parsed: Region = region.to_string().parse().unwrap();
            assert_eq!(parsed, region);
        }
    }

    #[test]
    fn test_region_parse_is_case_insensitive() {
        assert_eq!("global average".parse::<Region>().unwrap(), Region::GlobalAverage);
        assert_eq!("US/CANADA".parse::<Region>().unwrap(), Region::UsCanada);
    }

    #[test]
    fn test_region_serde_names() {
        let json = serde_json::to_string(&Region::UsCanada).unwrap();
        assert_eq!(json, "\"US/Canada\"");
        let json = serde_json::to_string(&Region::GlobalAverage).unwrap();
        assert_eq!(json, "\"Global Average\"");
    }

    #[test]
    fn test_category_serde_snake_case() {
        let json = serde_json::to_string(&SubtaskCategory::Frontend).unwrap();
        assert_eq!(json, "\"frontend\"");
        let parsed: SubtaskCategory = serde_json::from_str("\"deployment\"").unwrap();
        assert_eq!(parsed, SubtaskCategory::Deployment);
    }

    #[test]
    fn test_subtask_serde_round_trip() {
        let subtask = Subtask {
            name: "Implement Header Component".to_string(),
            description: "Create header component: header with logo".to_string(),
            category: SubtaskCategory::Frontend,
            dependencies: vec!["Design & Wireframing".to_string()],
            estimated_hours: "2-6".to_string(),
            complexity_factors: vec!["navigation complexity".to_string()],
        };

        let json = serde_json::to_string(&subtask).unwrap();
        let back: Subtask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, subtask);
    }
}
