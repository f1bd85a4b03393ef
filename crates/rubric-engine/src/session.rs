//! The writing session: the one owner of mutable state around the core.
//!
//! The core functions (normalize, analyze, compile, evaluate) stay pure;
//! the session just holds the compiled requirement set and the latest
//! document markup and re-runs the full pipeline on each edit. Evaluation
//! is single-threaded and synchronous: one recomputation in flight at a
//! time, with no incremental state between edits.

use shared_types::{
    ProgressReport, Requirement, RequirementCheck, SessionProgress,
};

use crate::{analysis, compiler, evaluator, normalize, suggestions};

pub struct WritingSession {
    requirements: Vec<Requirement>,
    document: String,
}

impl WritingSession {
    /// Compile the rubric and start with an empty document
    pub fn new(rubric_text: &str) -> Self {
        Self {
            requirements: compiler::compile_rubric(rubric_text),
            document: String::new(),
        }
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Replace the requirement set wholesale from a new rubric.
    /// There is no partial update of requirement sets.
    pub fn set_rubric(&mut self, rubric_text: &str) {
        self.requirements = compiler::compile_rubric(rubric_text);
    }

    /// Push the current editor markup. The editing surface calls this on
    /// every edit event, with no debouncing assumed; once per keystroke
    /// is fine, since a report is linear in document length.
    pub fn set_document(&mut self, markup: &str) {
        self.document = markup.to_string();
    }

    /// Full, unconditional recomputation over the current document
    pub fn report(&self) -> ProgressReport {
        let text = normalize::normalize(&self.document);
        let snapshot = analysis::analyze(&text);

        let checks: Vec<RequirementCheck> = self
            .requirements
            .iter()
            .map(|requirement| RequirementCheck {
                id: requirement.id().to_string(),
                status: evaluator::evaluate(requirement, &snapshot),
            })
            .collect();

        let completed = checks.iter().filter(|c| c.status.complete).count();
        let total = checks.len();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };

        ProgressReport {
            suggestions: suggestions::suggestions(&snapshot),
            snapshot,
            checks,
            progress: SessionProgress {
                completed,
                total,
                percent,
            },
            generated_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Badge;

    const RUBRIC: &str = "Assignment Rubric\n\
        1. Clear Thesis Statement (20 points)\n\
        2. Organization and Length (20 points) - Minimum 500 words\n\
        3. Citations (30 points) - At least 3 scholarly sources\n\
        4. Writing Mechanics (30 points) - Grammar and spelling";

    #[test]
    fn test_new_session_starts_empty() {
        let session = WritingSession::new(RUBRIC);
        assert_eq!(session.requirements().len(), 4);
        assert_eq!(session.document(), "");

        let report = session.report();
        assert_eq!(report.snapshot.word_count, 0);
        assert_eq!(report.progress.completed, 0);
        assert_eq!(report.progress.total, 4);
        assert_eq!(report.progress.percent, 0);
        assert!(report.suggestions.is_empty());
        for check in &report.checks {
            assert_eq!(check.status.badge, Badge::NeedsWork);
        }
    }

    #[test]
    fn test_report_reflects_markup_edits() {
        let mut session = WritingSession::new(RUBRIC);
        session.set_document("<p>This essay examines bees. It cites (Smith, 2020).</p>");

        let report = session.report();
        assert!(report.snapshot.has_thesis);
        assert_eq!(report.snapshot.citation_count, 1);
        assert!(report.status("thesis").unwrap().complete);
        assert_eq!(
            report.status("citations").unwrap().badge,
            Badge::InProgress
        );
    }

    #[test]
    fn test_progress_percent_rounds() {
        let mut session = WritingSession::new(RUBRIC);
        // Satisfy exactly the thesis requirement: 150+ words, nothing else.
        let body = "word ".repeat(160);
        session.set_document(&body);

        let report = session.report();
        assert_eq!(report.progress.completed, 1);
        assert_eq!(report.progress.total, 4);
        assert_eq!(report.progress.percent, 25);
    }

    #[test]
    fn test_repeated_edits_with_same_text_are_stable() {
        let mut session = WritingSession::new(RUBRIC);
        session.set_document("Some draft text about bees.");
        let first = session.report();
        session.set_document("Some draft text about bees.");
        let second = session.report();
        assert_eq!(first.snapshot, second.snapshot);
        assert_eq!(first.checks, second.checks);
    }

    #[test]
    fn test_report_serializes_for_presentation_layer() {
        let mut session = WritingSession::new(RUBRIC);
        session.set_document("<p>A short draft.</p>");
        let report = session.report();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["snapshot"]["word_count"], 3);
        assert_eq!(json["progress"]["total"], 4);
        assert!(json["checks"].as_array().is_some());
    }

    #[test]
    fn test_set_rubric_replaces_requirements_wholesale() {
        let mut session = WritingSession::new(RUBRIC);
        assert_eq!(session.requirements().len(), 4);
        session.set_rubric("citation");
        assert_eq!(session.requirements().len(), 1);
        assert_eq!(session.requirements()[0].id(), "citations");
    }
}
