//! Live rubric feedback engine.
//!
//! Turns free-form rubric text into a checkable requirement set, and the
//! current document text into a snapshot of structural signals those
//! requirements are evaluated against. Four stages, all pure functions:
//!
//! 1. [`normalize`] strips markup from the editor's document content
//! 2. [`analysis::analyze`] derives an [`shared_types::AnalysisSnapshot`]
//! 3. [`compiler::compile_rubric`] turns rubric text into ordered requirements
//! 4. [`evaluator::evaluate`] combines a requirement and a snapshot into a status
//!
//! [`session::WritingSession`] wires the stages together for callers and
//! owns the only mutable state (current markup, compiled requirements).
//! No stage performs I/O, raises errors, or keeps state between calls.

pub mod analysis;
pub mod compiler;
pub mod evaluator;
pub mod normalize;
pub mod patterns;
pub mod session;
pub mod suggestions;

pub use analysis::analyze;
pub use compiler::compile_rubric;
pub use evaluator::{evaluate, is_satisfied};
pub use normalize::normalize;
pub use session::WritingSession;

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Badge;

    #[test]
    fn test_full_pipeline_on_growing_draft() {
        let mut session = WritingSession::new(
            "Essay must have a clear thesis, at least 3 citations, \
             500 words in length, and proper grammar.",
        );
        assert_eq!(session.requirements().len(), 4);

        // A few words in: everything still outstanding.
        session.set_document("<p>Bees are important.</p>");
        let report = session.report();
        assert_eq!(report.progress.completed, 0);

        // A substantial draft with citations and a conclusion.
        let paragraph =
            "This essay examines the decline of bee populations across Europe. ".repeat(10);
        let cited = format!(
            "{paragraph}\n\n{paragraph}\n\n{paragraph}\n\nStudies agree (Smith, 2020). \
             Jones et al. concur, as do Brown and colleagues. \
             In conclusion, the trend is unmistakable."
        );
        session.set_document(&cited);
        let report = session.report();

        assert!(report.snapshot.word_count >= 300);
        assert_eq!(report.snapshot.citation_count, 3);
        assert!(report.snapshot.has_conclusion);
        assert!(report.status("thesis").unwrap().complete);
        assert!(report.status("citations").unwrap().complete);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_unmatched_rubric_still_produces_feedback() {
        let session = WritingSession::new("Score out of 100. Good luck!");
        let report = session.report();
        // Fallback set, all four checks present and red on an empty doc.
        assert_eq!(report.checks.len(), 4);
        assert!(report
            .checks
            .iter()
            .all(|c| c.status.badge == Badge::NeedsWork));
    }

    #[test]
    fn test_analysis_matches_direct_calls() {
        // The session pipeline is exactly normalize-then-analyze.
        let markup = "<h1>Title</h1><p>Body&nbsp;text goes here.</p>";
        let mut session = WritingSession::new("");
        session.set_document(markup);
        assert_eq!(
            session.report().snapshot,
            analyze(&normalize(markup))
        );
    }
}
