//! Requirement evaluator: combines each requirement's pass/fail rule with
//! progress heuristics into a `RequirementStatus`.
//!
//! Everything here is a pure function of the current inputs. There is no
//! persistent state machine: a Done badge is re-derived on every analysis
//! update and reverts if edits drop the document below a threshold again.

use shared_types::{AnalysisSnapshot, Badge, Requirement, RequirementKind, RequirementStatus};

/// Word-count target behind the organization requirement
const ORGANIZATION_TARGET_WORDS: usize = 500;

/// Citations needed for the citations requirement to pass
const CITATION_TARGET: usize = 3;

/// Pass/fail predicate for a requirement kind over the current snapshot
pub fn is_satisfied(kind: &RequirementKind, analysis: &AnalysisSnapshot) -> bool {
    match kind {
        RequirementKind::Thesis => analysis.has_thesis || analysis.word_count >= 150,
        RequirementKind::Organization => analysis.word_count >= ORGANIZATION_TARGET_WORDS,
        RequirementKind::Citations => analysis.citation_count >= CITATION_TARGET,
        RequirementKind::Mechanics => analysis.has_good_mechanics || analysis.word_count >= 400,
        RequirementKind::Custom(predicate) => {
            predicate.min_words.map_or(true, |n| analysis.word_count >= n)
                && predicate
                    .min_citations
                    .map_or(true, |n| analysis.citation_count >= n)
                && (!predicate.require_conclusion || analysis.has_conclusion)
        }
    }
}

type ProgressGate = fn(&AnalysisSnapshot) -> bool;

/// Per-kind "in progress" gates, consulted only when the requirement is
/// not yet satisfied. Kinds without an entry go straight to NeedsWork.
fn progress_gate(kind: &RequirementKind) -> Option<ProgressGate> {
    match kind {
        RequirementKind::Thesis => Some(|a| a.word_count > 50),
        RequirementKind::Organization => Some(|a| a.word_count > 200 && a.word_count < 500),
        RequirementKind::Citations => Some(|a| a.citation_count > 0),
        RequirementKind::Mechanics => Some(|a| a.has_good_mechanics && a.word_count >= 100),
        RequirementKind::Custom(_) => None,
    }
}

/// Derive the current status of one requirement from the snapshot
pub fn evaluate(requirement: &Requirement, analysis: &AnalysisSnapshot) -> RequirementStatus {
    let complete = is_satisfied(&requirement.kind, analysis);

    let badge = if complete {
        Badge::Done
    } else if progress_gate(&requirement.kind).is_some_and(|gate| gate(analysis)) {
        Badge::InProgress
    } else {
        Badge::NeedsWork
    };

    RequirementStatus {
        complete,
        badge,
        progress_text: progress_text(requirement, analysis, complete),
        percent: completion_percent(&requirement.kind, analysis),
    }
}

/// Human-readable progress line per requirement kind. Purely
/// presentational; not part of the completion contract.
fn progress_text(requirement: &Requirement, analysis: &AnalysisSnapshot, complete: bool) -> String {
    match &requirement.kind {
        RequirementKind::Thesis => {
            if complete {
                "✓ Thesis statement detected in introduction".to_string()
            } else if analysis.word_count > 50 {
                "Keep writing to develop your thesis".to_string()
            } else {
                requirement.description.clone()
            }
        }
        RequirementKind::Organization => {
            if complete {
                format!("✓ Well organized with {} words", analysis.word_count)
            } else {
                format!(
                    "Current: {} words (target: {}+)",
                    analysis.word_count, ORGANIZATION_TARGET_WORDS
                )
            }
        }
        RequirementKind::Citations => {
            if complete {
                format!("✓ Found {} citations", analysis.citation_count)
            } else if analysis.citation_count > 0 {
                let plural = if analysis.citation_count == 1 { "" } else { "s" };
                format!(
                    "Found {} citation{} (need {} more)",
                    analysis.citation_count,
                    plural,
                    CITATION_TARGET - analysis.citation_count
                )
            } else {
                requirement.description.clone()
            }
        }
        RequirementKind::Mechanics => {
            if complete {
                "✓ Writing mechanics look good".to_string()
            } else if analysis.word_count >= 100 {
                "Review for grammar, clarity, and tone".to_string()
            } else {
                "Keep writing to assess mechanics".to_string()
            }
        }
        RequirementKind::Custom(_) => requirement.description.clone(),
    }
}

/// Completion fraction toward the word-count target, for the one kind
/// that renders a progress bar
fn completion_percent(kind: &RequirementKind, analysis: &AnalysisSnapshot) -> Option<u8> {
    match kind {
        RequirementKind::Organization => {
            let percent = (analysis.word_count * 100 / ORGANIZATION_TARGET_WORDS).min(100);
            Some(percent as u8)
        }
        _ => None,
    }
}
