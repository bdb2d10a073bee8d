use regex::Regex;
use serde::{Deserialize, Serialize};

/// A named classification category with its trigger evidence.
///
/// A rule matches a report when any of its `keywords` occur as normalized
/// tokens of the input, or any of its `patterns` match the lowercased input
/// text. Patterns are the structural side of the rule: they see the full
/// text rather than the token list, so multi-word triggers like
/// `pump\s+station` or digit-adjacent forms like `compressor\s+\d+` work.
///
/// # Examples
///
/// ```
/// use fieldtag::TagRule;
/// use regex::Regex;
///
/// let rule = TagRule::new(
///     "Corrosion",
///     vec!["rust".to_string(), "rusted".to_string()],
///     vec![Regex::new(r"\brust\w*\b").unwrap()],
///     2,
/// );
/// assert_eq!(rule.name(), "Corrosion");
/// assert_eq!(rule.trigger_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TagRule {
    name: String,
    keywords: Vec<String>,
    patterns: Vec<Regex>,
    priority: i32,
    description: String,
}

impl TagRule {
    /// Creates a new rule with an empty description.
    ///
    /// Keywords are lowercased on construction; matching is performed
    /// against lowercased tokens, so mixed-case keyword definitions would
    /// otherwise never fire.
    pub fn new(
        name: impl Into<String>,
        keywords: Vec<String>,
        patterns: Vec<Regex>,
        priority: i32,
    ) -> Self {
        Self::with_description(name, keywords, patterns, priority, "")
    }

    /// Creates a new rule carrying a human-readable description.
    ///
    /// The description is surfaced by
    /// [`TagSuggester::explain`](crate::TagSuggester::explain).
    pub fn with_description(
        name: impl Into<String>,
        keywords: Vec<String>,
        patterns: Vec<Regex>,
        priority: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            patterns,
            priority,
            description: description.into(),
        }
    }

    /// Returns the rule's unique display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lowercase literal tokens counting as direct evidence.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the compiled structural matchers.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Returns the tie-break rank. Higher priority wins confidence ties.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the human-readable description (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Total number of defined triggers (keywords plus patterns).
    pub fn trigger_count(&self) -> usize {
        self.keywords.len() + self.patterns.len()
    }
}

/// Raw, serializable form of a rule as it appears in a rule file.
///
/// Patterns are plain strings here; compiling them into a [`TagRule`] is
/// where malformed expressions surface, at library-load time rather than at
/// call time.
///
/// # Examples
///
/// ```
/// use fieldtag::RuleDef;
///
/// let def: RuleDef = serde_json::from_str(
///     r#"{ "name": "Leak", "keywords": ["leak", "drip"], "patterns": ["\\bleak\\w*\\b"], "priority": 2 }"#,
/// )?;
/// assert_eq!(def.name, "Leak");
/// assert_eq!(def.keywords.len(), 2);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    /// Unique display label for the tag.
    pub name: String,
    /// Literal token triggers.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Structural triggers as uncompiled regular expressions.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Tie-break rank; higher wins. Defaults to 1.
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Optional human-readable description.
    #[serde(default)]
    pub description: String,
}

fn default_priority() -> i32 {
    1
}
