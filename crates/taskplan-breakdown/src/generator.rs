//! Breakdown generation: requirements into a dependency-ordered subtask list

use crate::extractor::{Requirement, RequirementExtractor};
use crate::templates;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use taskplan_core::{Subtask, SubtaskCategory};
use tracing::debug;

/// Project type that selects the web-specific breakdown algorithm
pub const WEB_DEVELOPMENT: &str = "web_development";

/// Full breakdown of a project description into ordered subtasks
///
/// Owns its subtasks. Every subtask's dependencies name subtasks that
/// appear earlier in `subtasks`; the generator guarantees this by emission
/// order and it is never re-validated downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownResult {
    /// Requirements extracted from the source description, in order
    pub requirements: Vec<Requirement>,
    pub project_type: String,
    pub subtasks: Vec<Subtask>,
    pub total_subtasks: usize,
}

impl fmt::Display for BreakdownResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project type: {}", self.project_type)?;
        writeln!(f, "  Requirements: {}", self.requirements.len())?;
        writeln!(f, "  Subtasks: {}", self.total_subtasks)?;
        writeln!(f)?;
        writeln!(f, "Subtask Breakdown:")?;
        for (idx, subtask) in self.subtasks.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} [{}] ({} hours)",
                idx + 1,
                subtask.name,
                subtask.category,
                subtask.estimated_hours
            )?;
        }
        Ok(())
    }
}

/// Accumulates subtasks while tracking emitted names, so every dependency
/// resolves to a subtask already present in the list
struct BreakdownBuilder {
    subtasks: Vec<Subtask>,
    names: HashSet<String>,
}

impl BreakdownBuilder {
    fn new() -> Self {
        Self { subtasks: Vec::new(), names: HashSet::new() }
    }

    fn push(&mut self, subtask: Subtask) {
        debug_assert!(
            subtask.dependencies.iter().all(|dep| self.names.contains(dep)),
            "subtask '{}' depends on a name not yet emitted",
            subtask.name
        );
        self.names.insert(subtask.name.clone());
        self.subtasks.push(subtask);
    }

    /// Names of frontend subtasks emitted so far, first occurrence only
    fn frontend_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.subtasks
            .iter()
            .filter(|subtask| subtask.category == SubtaskCategory::Frontend)
            .filter(|subtask| seen.insert(subtask.name.clone()))
            .map(|subtask| subtask.name.clone())
            .collect()
    }

    fn finish(self) -> Vec<Subtask> {
        self.subtasks
    }
}

/// Generates an ordered subtask list from a project description
///
/// Pure and deterministic: the same description and project type always
/// produce the same breakdown.
#[derive(Debug, Default)]
pub struct BreakdownGenerator {
    extractor: RequirementExtractor,
}

impl BreakdownGenerator {
    pub fn new() -> Self {
        Self { extractor: RequirementExtractor::new() }
    }

    pub fn generate(&self, description: &str, project_type: &str) -> BreakdownResult {
        let requirements = self.extractor.extract(description);

        let subtasks = if project_type == WEB_DEVELOPMENT {
            Self::web_subtasks(&requirements)
        } else {
            Self::generic_subtasks(&requirements)
        };

        debug!(
            project_type,
            requirements = requirements.len(),
            subtasks = subtasks.len(),
            "generated breakdown"
        );

        BreakdownResult {
            total_subtasks: subtasks.len(),
            requirements,
            project_type: project_type.to_string(),
            subtasks,
        }
    }

    /// Web algorithm: fixed leading phases, one subtask per requirement,
    /// fixed trailing phases
    fn web_subtasks(requirements: &[Requirement]) -> Vec<Subtask> {
        let mut builder = BreakdownBuilder::new();

        builder.push(templates::project_setup());
        builder.push(templates::design_wireframing());

        for (idx, requirement) in requirements.iter().enumerate() {
            builder.push(Self::requirement_subtask(idx, requirement));
        }

        let frontend = builder.frontend_names();
        builder.push(templates::responsive_design(frontend));
        builder.push(templates::testing_qa());
        builder.push(templates::deployment_launch());

        builder.finish()
    }

    /// First-match-wins over the ordered rule list; unmatched requirements
    /// become subtasks named by their 1-based position
    fn requirement_subtask(idx: usize, requirement: &Requirement) -> Subtask {
        let lower = requirement.text.to_lowercase();

        for rule in templates::REQUIREMENT_RULES {
            if rule.keywords.iter().any(|keyword| lower.contains(*keyword)) {
                return Subtask {
                    name: rule.name.to_string(),
                    description: format!("{}{}", rule.description_prefix, requirement.text),
                    category: SubtaskCategory::Frontend,
                    dependencies: vec![templates::DESIGN_WIREFRAMING.to_string()],
                    estimated_hours: rule.estimated_hours.to_string(),
                    complexity_factors: rule
                        .complexity_factors
                        .iter()
                        .map(|factor| (*factor).to_string())
                        .collect(),
                };
            }
        }

        Subtask {
            name: format!("Implement Requirement {}", idx + 1),
            description: requirement.text.clone(),
            category: SubtaskCategory::Frontend,
            dependencies: vec![templates::DESIGN_WIREFRAMING.to_string()],
            estimated_hours: "2-8".to_string(),
            complexity_factors: vec![
                "requirement complexity".to_string(),
                "integration needs".to_string(),
            ],
        }
    }

    /// Generic fallback: one subtask per requirement, no fixed phases
    fn generic_subtasks(requirements: &[Requirement]) -> Vec<Subtask> {
        let mut builder = BreakdownBuilder::new();

        for (idx, requirement) in requirements.iter().enumerate() {
            builder.push(Subtask {
                name: format!("Task {}", idx + 1),
                description: requirement.text.clone(),
                category: SubtaskCategory::Frontend,
                dependencies: Vec::new(),
                estimated_hours: "2-8".to_string(),
                complexity_factors: Vec::new(),
            });
        }

        builder.finish()
    }
}

/// Generate a breakdown using a freshly constructed generator
pub fn generate_breakdown(description: &str, project_type: &str) -> BreakdownResult {
    BreakdownGenerator::new().generate(description, project_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{
        DEPLOYMENT_LAUNCH, DESIGN_WIREFRAMING, PROJECT_SETUP, RESPONSIVE_DESIGN, TESTING_QA,
    };

    const DESCRIPTION: &str = "\
Build a landing page.
- header with logo and navigation
- footer with social links
- product description section
- contact form with validation
- newsletter signup";

    /// Every dependency must name a subtask that appears earlier in the list
    fn assert_dependencies_resolve(subtasks: &[Subtask]) {
        let mut seen: HashSet<&str> = HashSet::new();
        for subtask in subtasks {
            for dep in &subtask.dependencies {
                assert!(
                    seen.contains(dep.as_str()),
                    "subtask '{}' depends on '{}' which was not emitted earlier",
                    subtask.name,
                    dep
                );
            }
            seen.insert(&subtask.name);
        }
    }

    #[test]
    fn test_web_breakdown_starts_and_ends_with_fixed_phases() {
        let result = generate_breakdown(DESCRIPTION, WEB_DEVELOPMENT);

        assert_eq!(result.subtasks[0].name, PROJECT_SETUP);
        assert_eq!(result.subtasks[1].name, DESIGN_WIREFRAMING);
        let last = result.subtasks.last().unwrap();
        assert_eq!(last.name, DEPLOYMENT_LAUNCH);
    }

    #[test]
    fn test_fixed_phases_survive_empty_description() {
        let result = generate_breakdown("", WEB_DEVELOPMENT);

        assert_eq!(result.total_subtasks, 5);
        assert_eq!(result.subtasks[0].name, PROJECT_SETUP);
        assert_eq!(result.subtasks[1].name, DESIGN_WIREFRAMING);
        assert_eq!(result.subtasks[2].name, RESPONSIVE_DESIGN);
        assert_eq!(result.subtasks[3].name, TESTING_QA);
        assert_eq!(result.subtasks[4].name, DEPLOYMENT_LAUNCH);
        // no frontend subtasks before it, so the responsive phase floats free
        assert!(result.subtasks[2].dependencies.is_empty());
        assert_dependencies_resolve(&result.subtasks);
    }

    #[test]
    fn test_requirements_map_to_rule_subtasks() {
        let result = generate_breakdown(DESCRIPTION, WEB_DEVELOPMENT);

        let names: Vec<&str> = result.subtasks.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                PROJECT_SETUP,
                DESIGN_WIREFRAMING,
                "Implement Header Component",
                "Implement Footer Component",
                "Implement Product Description Section",
                "Implement Contact Section",
                "Implement Requirement 5",
                RESPONSIVE_DESIGN,
                TESTING_QA,
                DEPLOYMENT_LAUNCH,
            ]
        );
    }

    #[test]
    fn test_dependency_invariant_holds() {
        let result = generate_breakdown(DESCRIPTION, WEB_DEVELOPMENT);
        assert_dependencies_resolve(&result.subtasks);
    }

    #[test]
    fn test_requirement_subtasks_depend_on_design() {
        let result = generate_breakdown(DESCRIPTION, WEB_DEVELOPMENT);

        for subtask in &result.subtasks[2..7] {
            assert_eq!(subtask.category, SubtaskCategory::Frontend);
            assert_eq!(subtask.dependencies, vec![DESIGN_WIREFRAMING.to_string()]);
        }
    }

    #[test]
    fn test_descriptions_embed_requirement_text() {
        let result = generate_breakdown("- header with logo", WEB_DEVELOPMENT);

        assert_eq!(
            result.subtasks[2].description,
            "Create header component: header with logo"
        );
    }

    #[test]
    fn test_header_rule_beats_contact_rule() {
        // contains both "form" and "header"; header is the earlier rule
        let result = generate_breakdown("- contact form in the header", WEB_DEVELOPMENT);
        assert_eq!(result.subtasks[2].name, "Implement Header Component");
    }

    #[test]
    fn test_responsive_phase_depends_on_all_frontend_subtasks() {
        let result = generate_breakdown(DESCRIPTION, WEB_DEVELOPMENT);

        let responsive =
            result.subtasks.iter().find(|s| s.name == RESPONSIVE_DESIGN).unwrap();
        assert_eq!(
            responsive.dependencies,
            vec![
                "Implement Header Component".to_string(),
                "Implement Footer Component".to_string(),
                "Implement Product Description Section".to_string(),
                "Implement Contact Section".to_string(),
                "Implement Requirement 5".to_string(),
            ]
        );
    }

    #[test]
    fn test_duplicate_requirement_produces_duplicate_subtask() {
        // both passes match this line, so the header subtask appears twice
        let result = generate_breakdown("- must have a header", WEB_DEVELOPMENT);

        let headers = result
            .subtasks
            .iter()
            .filter(|s| s.name == "Implement Header Component")
            .count();
        assert_eq!(headers, 2);

        // the responsive dependency list names it once
        let responsive =
            result.subtasks.iter().find(|s| s.name == RESPONSIVE_DESIGN).unwrap();
        assert_eq!(responsive.dependencies, vec!["Implement Header Component".to_string()]);
        assert_dependencies_resolve(&result.subtasks);
    }

    #[test]
    fn test_generic_fallback_has_no_fixed_phases() {
        let result = generate_breakdown("- write a parser\n- write a printer", "compiler");

        assert_eq!(result.total_subtasks, 2);
        assert_eq!(result.subtasks[0].name, "Task 1");
        assert_eq!(result.subtasks[0].description, "write a parser");
        assert!(result.subtasks[0].dependencies.is_empty());
        assert_eq!(result.subtasks[1].name, "Task 2");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate_breakdown(DESCRIPTION, WEB_DEVELOPMENT);
        let second = generate_breakdown(DESCRIPTION, WEB_DEVELOPMENT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes() {
        let result = generate_breakdown(DESCRIPTION, WEB_DEVELOPMENT);
        let json = serde_json::to_string(&result).unwrap();
        let back: BreakdownResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_display_lists_subtasks_in_order() {
        let result = generate_breakdown("- header with logo", WEB_DEVELOPMENT);
        let rendered = result.to_string();

        assert!(rendered.contains("Project type: web_development"));
        assert!(rendered.contains("1. Project Setup & Planning [setup] (2-4 hours)"));
        assert!(rendered.contains("Implement Header Component [frontend] (2-6 hours)"));
    }
}
