//! Ordered keyword rule tables.
//!
//! Each classifier is an ordered list of (label, keyword set) pairs checked
//! against the case-folded message. The first rule with any matching keyword
//! wins, which makes the priority contract explicit and testable.

/// One rule in an ordered table: a label and the substrings that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub label: T,
    pub keywords: &'static [&'static str],
}

/// Evaluate an ordered rule table against already-lowercased text.
/// Returns the first matching label, or `default` when nothing matches.
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], text_lower: &str, default: T) -> T {
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| text_lower.contains(kw)))
        .map(|rule| rule.label)
        .unwrap_or(default)
}
