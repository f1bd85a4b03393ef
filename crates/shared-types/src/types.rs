//! Data model shared between the rubric engine and its consumers.
//!
//! Everything here is plain serializable data: the engine crate owns all
//! decision logic, and the presentation layer only ever sees these types.

/// Structural and lexical signals derived from the current document text.
///
/// Recomputed in full on every edit event as a pure function of the text;
/// never mutated in place. All signals are literal pattern matches, not
/// semantic inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisSnapshot {
    pub word_count: usize,
    pub has_thesis: bool,
    /// Non-overlapping matches summed across all citation patterns.
    /// A citation matching two patterns counts twice; completion
    /// thresholds were tuned against that over-count, so it is kept.
    pub citation_count: usize,
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub has_organization: bool,
    pub has_good_mechanics: bool,
}

/// The pass/fail rule attached to a requirement.
///
/// A tagged variant dispatched through a pure evaluation function, rather
/// than a stored closure, so the requirement set stays serializable and
/// each rule is testable in isolation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Thesis,
    Organization,
    Citations,
    Mechanics,
    Custom(CustomPredicate),
}

impl RequirementKind {
    /// Stable key used for status lookup.
    pub fn id(&self) -> &str {
        match self {
            RequirementKind::Thesis => "thesis",
            RequirementKind::Organization => "organization",
            RequirementKind::Citations => "citations",
            RequirementKind::Mechanics => "mechanics",
            RequirementKind::Custom(p) => &p.id,
        }
    }
}

/// Declarative predicate for requirements outside the canonical four.
/// Every populated threshold must hold for the requirement to pass.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CustomPredicate {
    pub id: String,
    pub min_words: Option<usize>,
    pub min_citations: Option<usize>,
    pub require_conclusion: bool,
}

/// One checkable item derived from a rubric.
///
/// Created once per rubric compilation and immutable thereafter; the whole
/// set is replaced wholesale when a new rubric is compiled.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub title: String,
    pub description: String,
    /// Writing-guide URL surfaced next to the requirement.
    pub resource_link: String,
}

impl Requirement {
    pub fn id(&self) -> &str {
        self.kind.id()
    }
}

/// Three-valued completion indicator shown per requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Badge {
    Done,
    InProgress,
    NeedsWork,
}

/// Derived per-requirement state. Computed on demand from a
/// `(Requirement, AnalysisSnapshot)` pair; has no lifecycle of its own,
/// so a Done badge reverts if later edits make the rule fail again.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RequirementStatus {
    pub complete: bool,
    pub badge: Badge,
    pub progress_text: String,
    /// Completion fraction toward the word-count target, where one is
    /// defined (organization only). Presentational.
    pub percent: Option<u8>,
}

/// One entry of the ordered id -> status map in a report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RequirementCheck {
    pub id: String,
    pub status: RequirementStatus,
}

/// The "X of Y complete" session readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent; 0 when the set is empty.
    pub percent: u8,
}

/// Advisory hints derived from fixed thresholds over the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    AddConclusion,
    AddCitations,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::AddConclusion => {
                "Consider adding a conclusion section to wrap up your arguments. \
                 Use phrases like \"In conclusion\" or \"Overall\" to signal your \
                 closing thoughts."
            }
            Suggestion::AddCitations => {
                "Your essay needs more citations. Try adding references like \
                 \"According to Smith (2024)...\" or \"(Author, 2024)\" to support \
                 your claims."
            }
        }
    }
}

/// Everything the presentation layer needs after one document edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressReport {
    pub snapshot: AnalysisSnapshot,
    /// Per-requirement statuses, in requirement order.
    pub checks: Vec<RequirementCheck>,
    pub progress: SessionProgress,
    pub suggestions: Vec<Suggestion>,
    pub generated_at: u64,
}

impl ProgressReport {
    /// Look up one requirement's status by its stable id.
    pub fn status(&self, id: &str) -> Option<&RequirementStatus> {
        self.checks.iter().find(|c| c.id == id).map(|c| &c.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_snapshot_is_all_zero() {
        let snap = AnalysisSnapshot::default();
        assert_eq!(snap.word_count, 0);
        assert!(!snap.has_thesis);
        assert_eq!(snap.citation_count, 0);
        assert!(!snap.has_introduction);
        assert!(!snap.has_conclusion);
        assert!(!snap.has_organization);
        assert!(!snap.has_good_mechanics);
    }

    #[test]
    fn test_canonical_kind_ids() {
        assert_eq!(RequirementKind::Thesis.id(), "thesis");
        assert_eq!(RequirementKind::Organization.id(), "organization");
        assert_eq!(RequirementKind::Citations.id(), "citations");
        assert_eq!(RequirementKind::Mechanics.id(), "mechanics");
    }

    #[test]
    fn test_custom_kind_uses_its_own_id() {
        let kind = RequirementKind::Custom(CustomPredicate {
            id: "sources-5".to_string(),
            min_words: None,
            min_citations: Some(5),
            require_conclusion: false,
        });
        assert_eq!(kind.id(), "sources-5");
    }

    #[test]
    fn test_requirement_round_trips_through_json() {
        let req = Requirement {
            kind: RequirementKind::Citations,
            title: "Academic Citations (3+ Sources)".to_string(),
            description: "Include at least three properly formatted scholarly citations"
                .to_string(),
            resource_link: "https://owl.purdue.edu/owl/research_and_citation/resources.html"
                .to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }

    #[test]
    fn test_report_status_lookup() {
        let report = ProgressReport {
            snapshot: AnalysisSnapshot::default(),
            checks: vec![RequirementCheck {
                id: "thesis".to_string(),
                status: RequirementStatus {
                    complete: false,
                    badge: Badge::NeedsWork,
                    progress_text: "Make sure your essay includes a clear, specific thesis"
                        .to_string(),
                    percent: None,
                },
            }],
            progress: SessionProgress {
                completed: 0,
                total: 1,
                percent: 0,
            },
            suggestions: Vec::new(),
            generated_at: 0,
        };
        assert!(report.status("thesis").is_some());
        assert!(report.status("citations").is_none());
    }
}
