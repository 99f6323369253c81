//! Fixed phase templates and requirement rules for web projects

use taskplan_core::{Subtask, SubtaskCategory};

/// Name of the leading setup phase
pub const PROJECT_SETUP: &str = "Project Setup & Planning";
/// Name of the design phase every requirement-derived subtask depends on
pub const DESIGN_WIREFRAMING: &str = "Design & Wireframing";
/// Name of the trailing responsive phase
pub const RESPONSIVE_DESIGN: &str = "Responsive Design Implementation";
/// Name of the trailing testing phase
pub const TESTING_QA: &str = "Testing & Quality Assurance";
/// Name of the trailing deployment phase
pub const DEPLOYMENT_LAUNCH: &str = "Deployment & Launch";

/// Maps requirement keywords to a subtask template
pub struct RequirementRule {
    /// Substrings probed against the lowercased requirement text
    pub keywords: &'static [&'static str],
    pub name: &'static str,
    /// The requirement text is appended to this prefix
    pub description_prefix: &'static str,
    pub estimated_hours: &'static str,
    pub complexity_factors: &'static [&'static str],
}

/// Ordered rule list, evaluated top to bottom with first match winning.
///
/// The order is a contract: header beats footer beats product/service
/// wording beats contact/form wording. Requirements matching none of these
/// become position-named generic subtasks.
pub const REQUIREMENT_RULES: &[RequirementRule] = &[
    RequirementRule {
        keywords: &["header"],
        name: "Implement Header Component",
        description_prefix: "Create header component: ",
        estimated_hours: "2-6",
        complexity_factors: &["navigation complexity", "responsive design", "branding elements"],
    },
    RequirementRule {
        keywords: &["footer"],
        name: "Implement Footer Component",
        description_prefix: "Create footer component: ",
        estimated_hours: "1-3",
        complexity_factors: &["content amount", "social links", "responsive layout"],
    },
    RequirementRule {
        keywords: &["product", "service", "description"],
        name: "Implement Product Description Section",
        description_prefix: "Create product/service description: ",
        estimated_hours: "3-8",
        complexity_factors: &["content structure", "media integration", "interactive elements"],
    },
    RequirementRule {
        keywords: &["contact", "form"],
        name: "Implement Contact Section",
        description_prefix: "Create contact functionality: ",
        estimated_hours: "2-8",
        complexity_factors: &["form complexity", "validation", "email integration"],
    },
];

/// Leading setup phase, no dependencies
pub fn project_setup() -> Subtask {
    Subtask {
        name: PROJECT_SETUP.to_string(),
        description: "Set up development environment and plan project structure".to_string(),
        category: SubtaskCategory::Setup,
        dependencies: Vec::new(),
        estimated_hours: "2-4".to_string(),
        complexity_factors: Vec::new(),
    }
}

/// Leading design phase, depends on setup
pub fn design_wireframing() -> Subtask {
    Subtask {
        name: DESIGN_WIREFRAMING.to_string(),
        description: "Create visual design and layout wireframes".to_string(),
        category: SubtaskCategory::Design,
        dependencies: vec![PROJECT_SETUP.to_string()],
        estimated_hours: "4-8".to_string(),
        complexity_factors: Vec::new(),
    }
}

/// Trailing responsive phase; depends on every frontend subtask emitted
/// before it, which may be none
pub fn responsive_design(dependencies: Vec<String>) -> Subtask {
    Subtask {
        name: RESPONSIVE_DESIGN.to_string(),
        description: "Ensure all components work across different devices".to_string(),
        category: SubtaskCategory::Frontend,
        dependencies,
        estimated_hours: "4-12".to_string(),
        complexity_factors: Vec::new(),
    }
}

/// Trailing testing phase, depends on the responsive phase
pub fn testing_qa() -> Subtask {
    Subtask {
        name: TESTING_QA.to_string(),
        description: "Test functionality and fix bugs".to_string(),
        category: SubtaskCategory::Testing,
        dependencies: vec![RESPONSIVE_DESIGN.to_string()],
        estimated_hours: "4-8".to_string(),
        complexity_factors: Vec::new(),
    }
}

/// Trailing deployment phase, depends on testing
pub fn deployment_launch() -> Subtask {
    Subtask {
        name: DEPLOYMENT_LAUNCH.to_string(),
        description: "Deploy to production and configure hosting".to_string(),
        category: SubtaskCategory::Deployment,
        dependencies: vec![TESTING_QA.to_string()],
        estimated_hours: "2-4".to_string(),
        complexity_factors: Vec::new(),
    }
}
