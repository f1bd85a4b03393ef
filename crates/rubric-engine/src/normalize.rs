//! Markup stripping for content pushed from the editing surface.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Inline markup tags, e.g. `<b>`, `</p>`, `<img src="...">`.
    static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Strip inline tags and the non-breaking-space entity from document
/// markup, replacing each with a single space, and trim the result.
///
/// Malformed markup degrades to best-effort text; this never fails.
pub fn normalize(markup: &str) -> String {
    let text = TAG_PATTERN.replace_all(markup, " ");
    let text = text.replace("&nbsp;", " ");
    text.trim().to_string()
}
