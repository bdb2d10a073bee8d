use serde::Serialize;

/// Ranked tag suggestions plus the keyword evidence extracted from the input.
///
/// `tags` is ordered highest confidence first; `keywords` is the full
/// normalized token sequence of the input, order-preserving with duplicates
/// kept. It is not filtered to matched-only tokens: the caller sees exactly
/// what the tokenizer saw.
///
/// Serializes to the wire shape consumed downstream:
///
/// ```json
/// { "tags": ["Corrosion", "Valve"], "keywords": ["rusted", "valve"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Suggested tag names, highest confidence first.
    pub tags: Vec<String>,
    /// Normalized tokens of the input, in input order, duplicates kept.
    pub keywords: Vec<String>,
}

impl Suggestion {
    /// True when no rule matched the input.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Why a particular tag fires (or does not) for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// The tag being explained.
    pub tag: String,
    /// The rule's own description, when the library carries one.
    pub description: String,
    /// Rule keywords that occur in the input's token sequence.
    pub matched_keywords: Vec<String>,
    /// Number of non-overlapping pattern matches against the input.
    pub pattern_hits: usize,
}
