//! Rubric compiler: free-form rubric text in, ordered requirement set out.
//!
//! Compilation runs once per rubric submission. The result is immutable
//! configuration for the rest of the writing session and is replaced
//! wholesale when a new rubric arrives.

use shared_types::{Requirement, RequirementKind};

use crate::patterns::{
    contains_any, CITATION_KEYWORDS, MECHANICS_KEYWORDS, ORGANIZATION_KEYWORDS, THESIS_KEYWORDS,
};

/// Compile rubric text into the ordered requirement set.
///
/// Each keyword group with at least one match contributes its canonical
/// requirement, in fixed order: thesis, organization, citations,
/// mechanics. A rubric matching no group falls back to the full default
/// set; the compiler never returns an empty list. Deterministic and
/// side-effect-free.
pub fn compile_rubric(rubric_text: &str) -> Vec<Requirement> {
    let lower = rubric_text.to_lowercase();
    let mut requirements = Vec::new();

    if contains_any(&lower, THESIS_KEYWORDS) {
        requirements.push(thesis_requirement());
    }
    if contains_any(&lower, ORGANIZATION_KEYWORDS) {
        requirements.push(organization_requirement());
    }
    if contains_any(&lower, CITATION_KEYWORDS) {
        requirements.push(citations_requirement());
    }
    if contains_any(&lower, MECHANICS_KEYWORDS) {
        requirements.push(mechanics_requirement());
    }

    // No recognized keywords is not an error: substitute the baseline set.
    if requirements.is_empty() {
        requirements = default_requirements();
    }

    tracing::debug!(count = requirements.len(), "compiled rubric");
    requirements
}

/// The four baseline checks, in canonical order
pub fn default_requirements() -> Vec<Requirement> {
    vec![
        thesis_requirement(),
        organization_requirement(),
        citations_requirement(),
        mechanics_requirement(),
    ]
}

fn thesis_requirement() -> Requirement {
    Requirement {
        kind: RequirementKind::Thesis,
        title: "Clear Thesis Statement".to_string(),
        description: "Make sure your essay includes a clear, specific thesis".to_string(),
        resource_link:
            "https://owl.purdue.edu/owl/general_writing/the_writing_process/thesis_statement_tips.html"
                .to_string(),
    }
}

fn organization_requirement() -> Requirement {
    Requirement {
        kind: RequirementKind::Organization,
        title: "Word Count / Organization".to_string(),
        description: "Ensure the essay meets length and organization requirements".to_string(),
        resource_link:
            "https://owl.purdue.edu/owl/general_writing/academic_writing/essay_writing/index.html"
                .to_string(),
    }
}

fn citations_requirement() -> Requirement {
    Requirement {
        kind: RequirementKind::Citations,
        title: "Academic Citations (3+ Sources)".to_string(),
        description: "Include at least three properly formatted scholarly citations".to_string(),
        resource_link: "https://owl.purdue.edu/owl/research_and_citation/resources.html"
            .to_string(),
    }
}

fn mechanics_requirement() -> Requirement {
    Requirement {
        kind: RequirementKind::Mechanics,
        title: "Revision / Writing Mechanics".to_string(),
        description: "Revise for grammar, clarity, and tone".to_string(),
        resource_link: "https://owl.purdue.edu/owl/general_writing/mechanics/index.html"
            .to_string(),
    }
}
