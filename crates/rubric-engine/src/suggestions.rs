//! Advisory hints surfaced alongside the requirement checklist.
//!
//! Like everything else in the engine these are fixed threshold rules
//! over the snapshot, not semantic analysis.

use shared_types::{AnalysisSnapshot, Suggestion};

/// Suggestions that apply to the current snapshot, in display order
pub fn suggestions(analysis: &AnalysisSnapshot) -> Vec<Suggestion> {
    let mut out = Vec::new();

    // Enough text to expect a wrap-up, but no conclusion signal yet.
    if !analysis.has_conclusion && analysis.word_count > 200 {
        out.push(Suggestion::AddConclusion);
    }

    // Essay is underway but citations are still short of the target.
    if analysis.citation_count < 3 && analysis.word_count > 300 {
        out.push(Suggestion::AddCitations);
    }

    out
}
