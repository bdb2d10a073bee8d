//! Scoring, threshold filtering, and ranking of tag rules.

use std::env;

use crate::models::{Explanation, Suggestion, TagRule};
use crate::rules::RuleLibrary;

use super::tokenizer::extract_keywords;

/// Default confidence threshold: any match qualifies.
pub const DEFAULT_THRESHOLD: f64 = 0.0;

/// Tunable knobs for the suggestion engine.
///
/// # Examples
///
/// ```
/// use fieldtag::SuggesterConfig;
///
/// let config = SuggesterConfig::default();
/// assert_eq!(config.threshold, 0.0);
/// assert_eq!(config.max_tags, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SuggesterConfig {
    /// Minimum confidence for a tag to be suggested. Matches scoring
    /// strictly below this value are discarded. At 0.0 any match qualifies;
    /// zero-match rules are always excluded regardless of threshold.
    pub threshold: f64,
    /// Optional cap on the number of suggested tags, applied after ranking.
    pub max_tags: Option<usize>,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_tags: None,
        }
    }
}

impl SuggesterConfig {
    /// Parses configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is unset or unparsable.
    ///
    /// # Environment Variables
    ///
    /// - `FIELDTAG_THRESHOLD` (f64, default 0.0): minimum confidence
    /// - `FIELDTAG_MAX_TAGS` (usize, unset by default): result cap
    pub fn from_env() -> Self {
        let threshold = env::var("FIELDTAG_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_THRESHOLD);

        let max_tags = env::var("FIELDTAG_MAX_TAGS")
            .ok()
            .and_then(|s| s.parse().ok());

        Self {
            threshold,
            max_tags,
        }
    }
}

/// Builder for constructing [`TagSuggester`] instances.
///
/// When no library is supplied, [`RuleLibrary::standard`] is used.
///
/// # Examples
///
/// ```
/// use fieldtag::TagSuggesterBuilder;
///
/// let suggester = TagSuggesterBuilder::new()
///     .threshold(0.6)
///     .max_tags(5)
///     .build();
///
/// let suggestion = suggester.suggest("Loud grinding noise from pump station");
/// assert_eq!(suggestion.tags[0], "Noise");
/// ```
#[derive(Debug, Default)]
pub struct TagSuggesterBuilder {
    library: Option<RuleLibrary>,
    config: SuggesterConfig,
}

impl TagSuggesterBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule library to score against.
    pub fn library(mut self, library: RuleLibrary) -> Self {
        self.library = Some(library);
        self
    }

    /// Sets the minimum confidence for a tag to be suggested.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Caps the number of suggested tags.
    pub fn max_tags(mut self, max_tags: usize) -> Self {
        self.config.max_tags = Some(max_tags);
        self
    }

    /// Builds the suggester, defaulting to the standard rule library.
    #[must_use]
    pub fn build(self) -> TagSuggester {
        TagSuggester {
            library: self.library.unwrap_or_else(RuleLibrary::standard),
            config: self.config,
        }
    }
}

/// Per-call scoring record for one rule. Discarded after ranking.
struct ScoredTag<'a> {
    rule: &'a TagRule,
    position: usize,
    confidence: f64,
}

/// Scores issue descriptions against a rule library.
///
/// Stateless per call: the library is read-only after construction and every
/// invocation allocates its own scoring structures, so concurrent calls from
/// multiple threads need no locking.
///
/// # Examples
///
/// ```
/// use fieldtag::{RuleLibrary, TagSuggester};
///
/// let suggester = TagSuggester::new(RuleLibrary::standard());
///
/// let suggestion = suggester.suggest("Scheduled maintenance on storage tank");
/// assert_eq!(suggestion.tags, ["Tank", "Routine"]);
///
/// // No matches is a normal empty result, never an error.
/// let nothing = suggester.suggest("");
/// assert!(nothing.tags.is_empty());
/// assert!(nothing.keywords.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TagSuggester {
    library: RuleLibrary,
    config: SuggesterConfig,
}

impl TagSuggester {
    /// Creates a suggester over the given library with default configuration.
    pub fn new(library: RuleLibrary) -> Self {
        Self::with_config(library, SuggesterConfig::default())
    }

    /// Creates a suggester with explicit configuration.
    pub fn with_config(library: RuleLibrary, config: SuggesterConfig) -> Self {
        Self { library, config }
    }

    /// Returns the library this suggester scores against.
    pub fn library(&self) -> &RuleLibrary {
        &self.library
    }

    /// Suggests tags for an issue description using the configured threshold.
    pub fn suggest(&self, description: &str) -> Suggestion {
        self.suggest_with_threshold(description, self.config.threshold)
    }

    /// Suggests tags with a one-off threshold override.
    ///
    /// Ranking is total and deterministic: descending confidence, then
    /// descending rule priority, then library declaration order. Repeated
    /// calls with identical input produce identical output.
    pub fn suggest_with_threshold(&self, description: &str, threshold: f64) -> Suggestion {
        let normalized = description.to_lowercase();
        let keywords = extract_keywords(description);

        let mut scored: Vec<ScoredTag<'_>> = Vec::new();
        for (position, rule) in self.library.rules().iter().enumerate() {
            let match_count = keyword_hits(&keywords, rule) + pattern_hits(&normalized, rule);
            if match_count == 0 {
                // A rule whose triggers never occur must not appear, even
                // at threshold 0.0.
                continue;
            }
            let confidence = confidence(match_count);
            if confidence < threshold {
                continue;
            }
            scored.push(ScoredTag {
                rule,
                position,
                confidence,
            });
        }

        scored.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| b.rule.priority().cmp(&a.rule.priority()))
                .then_with(|| a.position.cmp(&b.position))
        });

        if let Some(limit) = self.config.max_tags {
            scored.truncate(limit);
        }

        Suggestion {
            tags: scored
                .iter()
                .map(|entry| entry.rule.name().to_string())
                .collect(),
            keywords,
        }
    }

    /// Explains why a tag fires (or does not) for a description.
    ///
    /// Returns `None` when the tag is not in the library.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldtag::{RuleLibrary, TagSuggester};
    ///
    /// let suggester = TagSuggester::new(RuleLibrary::standard());
    /// let explanation = suggester
    ///     .explain("Corrosion", "Rusted valve found near compressor 2")
    ///     .unwrap();
    ///
    /// assert_eq!(explanation.matched_keywords, ["rusted"]);
    /// assert_eq!(explanation.pattern_hits, 1);
    /// assert!(suggester.explain("Unknown", "any text").is_none());
    /// ```
    pub fn explain(&self, tag_name: &str, description: &str) -> Option<Explanation> {
        let rule = self.library.get(tag_name)?;
        let normalized = description.to_lowercase();
        let tokens = extract_keywords(description);

        let matched_keywords = rule
            .keywords()
            .iter()
            .filter(|keyword| tokens.iter().any(|token| token == *keyword))
            .cloned()
            .collect();

        Some(Explanation {
            tag: rule.name().to_string(),
            description: rule.description().to_string(),
            matched_keywords,
            pattern_hits: pattern_hits(&normalized, rule),
        })
    }
}

/// Saturating confidence in `match_count`.
///
/// Repeated mentions are counted, so a rule's match count can exceed its
/// trigger count; the trigger-fraction form would then leave [0, 1]. The
/// saturating form `n / (n + 1)` stays in [0, 1) and is strictly increasing,
/// so more hits always rank higher: one hit scores 0.5, two 0.667, three
/// 0.75, approaching 1.0.
fn confidence(match_count: usize) -> f64 {
    match_count as f64 / (match_count as f64 + 1.0)
}

/// Tokens equal to any rule keyword, counted with multiplicity.
fn keyword_hits(tokens: &[String], rule: &TagRule) -> usize {
    tokens
        .iter()
        .filter(|token| rule.keywords().iter().any(|keyword| keyword == *token))
        .count()
}

/// Non-overlapping pattern matches against the lowercased input text,
/// summed across the rule's patterns.
fn pattern_hits(normalized: &str, rule: &TagRule) -> usize {
    rule.patterns()
        .iter()
        .map(|pattern| pattern.find_iter(normalized).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagRule;
    use regex::Regex;
    use serial_test::serial;

    fn keyword_rule(name: &str, keywords: &[&str], priority: i32) -> TagRule {
        TagRule::new(
            name,
            keywords.iter().map(|k| k.to_string()).collect(),
            Vec::new(),
            priority,
        )
    }

    fn library(rules: Vec<TagRule>) -> RuleLibrary {
        RuleLibrary::new(rules).unwrap()
    }

    #[test]
    fn confidence_saturates_toward_one() {
        assert_eq!(confidence(1), 0.5);
        assert!((confidence(2) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(confidence(3), 0.75);
        assert!(confidence(100) < 1.0);
        assert!(confidence(2) > confidence(1));
    }

    #[test]
    fn single_hit_rules_tie_break_by_declaration_order() {
        let suggester = TagSuggester::new(library(vec![
            keyword_rule("Corrosion", &["rusted"], 1),
            keyword_rule("Valve", &["valve"], 1),
            keyword_rule("Compressor", &["compressor"], 1),
        ]));

        let suggestion = suggester.suggest("Rusted valve found near compressor 2");

        assert_eq!(
            suggestion.keywords,
            ["rusted", "valve", "found", "near", "compressor", "2"]
        );
        assert_eq!(suggestion.tags, ["Corrosion", "Valve", "Compressor"]);
    }

    #[test]
    fn zero_hit_rules_are_excluded_at_any_threshold() {
        let suggester = TagSuggester::new(library(vec![
            keyword_rule("Noise", &["noise", "loud", "grinding"], 2),
            keyword_rule("Compressor", &["compressor", "blower"], 1),
        ]));

        let suggestion = suggester.suggest("Loud grinding noise from pump station");
        assert_eq!(suggestion.tags, ["Noise"]);

        // Still excluded when the threshold is raised.
        let filtered = suggester.suggest_with_threshold("Loud grinding noise from pump station", 0.6);
        assert_eq!(filtered.tags, ["Noise"]);
    }

    #[test]
    fn empty_input_yields_empty_result_without_error() {
        let suggester = TagSuggester::new(library(vec![keyword_rule("Valve", &["valve"], 1)]));

        let suggestion = suggester.suggest("");

        assert!(suggestion.tags.is_empty());
        assert!(suggestion.keywords.is_empty());
        assert!(suggestion.is_empty());
    }

    #[test]
    fn repeated_calls_produce_identical_output() {
        let suggester = TagSuggester::new(RuleLibrary::standard());
        let text = "Critical leak at the control room, urgent repair needed";

        let first = suggester.suggest(text);
        let second = suggester.suggest(text);

        assert_eq!(first, second);
    }

    #[test]
    fn raising_threshold_never_grows_the_result() {
        let suggester = TagSuggester::new(RuleLibrary::standard());
        let text = "Pressure gauge reading 150 psi on line 3, vibrating badly";

        let mut previous = usize::MAX;
        for threshold in [0.0, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0] {
            let count = suggester.suggest_with_threshold(text, threshold).tags.len();
            assert!(count <= previous, "threshold {threshold} grew the result");
            previous = count;
        }
    }

    #[test]
    fn more_triggers_firing_outranks_fewer_despite_priority() {
        // Both rules define two triggers; only one of Partial's fires.
        let suggester = TagSuggester::new(library(vec![
            keyword_rule("Partial", &["seal", "gasket"], 3),
            keyword_rule("Full", &["flange", "bolt"], 1),
        ]));

        let suggestion = suggester.suggest("flange bolt seal");

        assert_eq!(suggestion.tags, ["Full", "Partial"]);
    }

    #[test]
    fn repeated_mentions_strengthen_evidence() {
        let suggester = TagSuggester::new(library(vec![
            keyword_rule("Valve", &["valve"], 1),
            keyword_rule("Leak", &["leak"], 1),
        ]));

        // Two "leak" tokens beat one "valve" token.
        let suggestion = suggester.suggest("valve leak, leak everywhere");

        assert_eq!(suggestion.tags, ["Leak", "Valve"]);
    }

    #[test]
    fn priority_breaks_confidence_ties() {
        let suggester = TagSuggester::new(library(vec![
            keyword_rule("Equipment", &["pump"], 1),
            keyword_rule("Severity", &["urgent"], 3),
        ]));

        // One hit each, so both score 0.5; higher priority wins.
        let suggestion = suggester.suggest("urgent pump");

        assert_eq!(suggestion.tags, ["Severity", "Equipment"]);
    }

    #[test]
    fn patterns_match_structure_the_token_list_cannot() {
        let zone = TagRule::new(
            "Compressor Zone",
            Vec::new(),
            vec![Regex::new(r"\bcompressor\s+\d+\b").unwrap()],
            1,
        );
        let suggester = TagSuggester::new(library(vec![zone]));

        let suggestion = suggester.suggest("Inspected compressor 2 this morning");
        assert_eq!(suggestion.tags, ["Compressor Zone"]);

        let no_digit = suggester.suggest("Inspected the compressor housing");
        assert!(no_digit.tags.is_empty());
    }

    #[test]
    fn pattern_hits_count_non_overlapping_occurrences() {
        let leak = TagRule::new(
            "Leak",
            Vec::new(),
            vec![Regex::new(r"\bleak\w*\b").unwrap()],
            2,
        );
        let valve = keyword_rule("Valve", &["valve"], 2);
        let suggester = TagSuggester::new(library(vec![valve, leak]));

        // Two pattern occurrences outrank one keyword hit.
        let suggestion = suggester.suggest("valve leaking, still leaks");

        assert_eq!(suggestion.tags, ["Leak", "Valve"]);
    }

    #[test]
    fn max_tags_truncates_after_ranking() {
        let suggester = TagSuggesterBuilder::new()
            .library(RuleLibrary::standard())
            .max_tags(2)
            .build();

        let suggestion = suggester.suggest("Rusted valve found near compressor 2");

        assert_eq!(suggestion.tags, ["Corrosion", "Valve"]);
    }

    #[test]
    fn threshold_override_does_not_touch_configured_value() {
        let suggester = TagSuggesterBuilder::new()
            .library(RuleLibrary::standard())
            .threshold(0.9)
            .build();

        let text = "Loud grinding noise from pump station";
        assert!(suggester.suggest(text).tags.is_empty());
        assert!(!suggester.suggest_with_threshold(text, 0.0).tags.is_empty());
        // The configured threshold still applies afterwards.
        assert!(suggester.suggest(text).tags.is_empty());
    }

    #[test]
    fn explain_reports_matched_evidence() {
        let suggester = TagSuggester::new(RuleLibrary::standard());

        let explanation = suggester
            .explain("Noise", "Loud grinding noise from pump station")
            .unwrap();

        assert_eq!(explanation.tag, "Noise");
        assert_eq!(explanation.description, "Noise issues");
        assert_eq!(explanation.matched_keywords, ["noise", "loud", "grinding"]);
        assert_eq!(explanation.pattern_hits, 3);
    }

    #[test]
    fn explain_unknown_tag_returns_none() {
        let suggester = TagSuggester::new(RuleLibrary::standard());
        assert!(suggester.explain("Turbine", "turbine trouble").is_none());
    }

    #[test]
    #[serial]
    fn from_env_reads_threshold_and_max_tags() {
        unsafe {
            env::set_var("FIELDTAG_THRESHOLD", "0.6");
            env::set_var("FIELDTAG_MAX_TAGS", "3");
        }

        let config = SuggesterConfig::from_env();
        assert_eq!(config.threshold, 0.6);
        assert_eq!(config.max_tags, Some(3));

        unsafe {
            env::remove_var("FIELDTAG_THRESHOLD");
            env::remove_var("FIELDTAG_MAX_TAGS");
        }
    }

    #[test]
    #[serial]
    fn from_env_falls_back_on_unset_or_invalid_values() {
        unsafe {
            env::set_var("FIELDTAG_THRESHOLD", "not-a-number");
            env::remove_var("FIELDTAG_MAX_TAGS");
        }

        let config = SuggesterConfig::from_env();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.max_tags, None);

        unsafe {
            env::remove_var("FIELDTAG_THRESHOLD");
        }
    }
}
