//! Keyword tables the rubric compiler matches against.
//!
//! These are compile-time constants, not runtime configuration: the
//! completion thresholds elsewhere in the engine were tuned against
//! exactly these groups.

/// Thesis/argument-related rubric keywords
pub const THESIS_KEYWORDS: &[&str] = &["thesis", "argument", "claim", "main point", "position"];

/// Citation/source-related rubric keywords
pub const CITATION_KEYWORDS: &[&str] = &[
    "citation",
    "reference",
    "source",
    "works cited",
    "bibliography",
];

/// Organization/length-related rubric keywords
pub const ORGANIZATION_KEYWORDS: &[&str] = &[
    "organization",
    "structure",
    "word count",
    "length",
    "paragraphs",
];

/// Mechanics/grammar-related rubric keywords
pub const MECHANICS_KEYWORDS: &[&str] = &[
    "grammar",
    "spelling",
    "mechanics",
    "punctuation",
    "clarity",
];

/// Check whether already-lowercased text mentions any keyword in the group
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}
