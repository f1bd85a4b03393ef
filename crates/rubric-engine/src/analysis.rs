//! Content analyzer: plain text in, `AnalysisSnapshot` out.
//!
//! Every rule here is a literal structural or lexical classifier. They are
//! computed independently and never short-circuit each other, so all
//! signals are always present in the snapshot. Each rule makes a single
//! pass over the text, keeping recomputation linear in document length,
//! since this runs once per keystroke-level edit.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::AnalysisSnapshot;

/// Window at the start of the text scanned for thesis-signal phrases
const THESIS_WINDOW_CHARS: usize = 500;

/// Total length past which a thesis is assumed present. Intentionally
/// permissive: a length fallback, not a precision claim.
const THESIS_LENGTH_FALLBACK_CHARS: usize = 300;

lazy_static! {
    /// Thesis-signaling phrases, scanned in the opening window
    static ref THESIS_SIGNAL_PATTERN: Regex = Regex::new(
        r"(?i)\b(this essay examines|this paper argues|this study explores|argues that|demonstrates that|examines|explores)\b"
    ).unwrap();

    /// Conclusion-signaling phrases, scanned anywhere in the text
    static ref CONCLUSION_SIGNAL_PATTERN: Regex = Regex::new(
        r"(?i)\b(in conclusion|to conclude|in summary|to summarize|finally|therefore|thus|overall|ultimately)\b"
    ).unwrap();

    /// The four literal citation shapes. Match counts are summed across
    /// all patterns with no cross-pattern deduplication: a citation that
    /// fits two shapes counts twice. That over-count is deliberate:
    /// requirement thresholds were tuned against it.
    static ref CITATION_PATTERNS: Vec<Regex> = vec![
        // Parenthetical author-year: "(Smith, 2020)"
        Regex::new(r"\([A-Z][a-z]+.*?\d{4}\)").unwrap(),
        // "Smith et al."
        Regex::new(r"[A-Z][a-z]+\s+et\s+al\.").unwrap(),
        // "Smith and Jones (2020)"
        Regex::new(r"[A-Z][a-z]+\s+and\s+[A-Z][a-z]+\s+\(\d{4}\)").unwrap(),
        // "Smith and colleagues"
        Regex::new(r"[A-Z][a-z]+\s+and\s+colleagues").unwrap(),
    ];
}

/// Analyze plain text (output of `normalize`) into a fresh snapshot.
///
/// Total on all inputs: empty or pathological text yields the all-zero
/// snapshot rather than failing.
pub fn analyze(text: &str) -> AnalysisSnapshot {
    let word_count = count_words(text);

    let snapshot = AnalysisSnapshot {
        word_count,
        has_thesis: detect_thesis(text),
        citation_count: count_citations(text),
        has_introduction: word_count >= 50,
        has_conclusion: CONCLUSION_SIGNAL_PATTERN.is_match(text),
        has_organization: detect_organization(text, word_count),
        has_good_mechanics: detect_good_mechanics(text, word_count),
    };

    tracing::debug!(
        words = snapshot.word_count,
        citations = snapshot.citation_count,
        "analyzed document"
    );

    snapshot
}

/// Whitespace-delimited non-empty tokens
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Thesis-signal phrase in the opening window, or the length fallback
fn detect_thesis(text: &str) -> bool {
    if THESIS_SIGNAL_PATTERN.is_match(head_chars(text, THESIS_WINDOW_CHARS)) {
        return true;
    }
    text.chars().count() > THESIS_LENGTH_FALLBACK_CHARS
}

/// Sum of non-overlapping matches per pattern, accumulated across patterns
fn count_citations(text: &str) -> usize {
    CITATION_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(text).count())
        .sum()
}

/// At least 3 substantial paragraphs (blank-line-delimited, trimmed length
/// over 50 chars) and at least 500 words
fn detect_organization(text: &str, word_count: usize) -> bool {
    let paragraphs = text
        .split("\n\n")
        .filter(|p| p.trim().chars().count() > 50)
        .count();
    paragraphs >= 3 && word_count >= 500
}

/// At least 5 sentence-like segments, some capitalization, over 200 words
fn detect_good_mechanics(text: &str, word_count: usize) -> bool {
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| s.trim().chars().count() > 10)
        .count();
    let has_capitalization = text.chars().any(|c| c.is_ascii_uppercase());
    sentences >= 5 && has_capitalization && word_count > 200
}

/// First `n` characters of the text (the whole text when shorter)
fn head_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
