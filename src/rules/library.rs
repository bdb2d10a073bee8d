use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

use crate::models::{RuleDef, TagRule};

use super::standard;

/// Errors raised while building or loading a rule library.
///
/// All variants are configuration errors: they surface at library-load time
/// and abort startup. A valid library can never fail during scoring, so
/// there is no call-time counterpart.
#[derive(Debug, Error)]
pub enum RuleLibraryError {
    /// Two rules share the same name.
    #[error("duplicate rule name: '{name}'")]
    DuplicateName { name: String },

    /// A rule defines neither keywords nor patterns and can never match.
    #[error("rule '{name}' has no keywords and no patterns")]
    NoTriggers { name: String },

    /// A rule pattern failed to compile.
    #[error("rule '{name}' has invalid pattern '{pattern}'")]
    InvalidPattern {
        name: String,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// A rule file could not be read.
    #[error("failed to read rule file")]
    Io(#[source] std::io::Error),

    /// A rule file could not be parsed as a JSON array of rule definitions.
    #[error("failed to parse rule file")]
    Parse(#[source] serde_json::Error),
}

/// An immutable, ordered collection of [`TagRule`] entries.
///
/// Declaration order is load-bearing: it is the final tie-break key during
/// ranking, so [`RuleLibrary::rules`] always iterates in the order rules
/// were declared, run to run. The library is read-only after construction
/// and can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use fieldtag::RuleLibrary;
///
/// let library = RuleLibrary::standard();
/// assert!(library.get("Corrosion").is_some());
/// assert!(library.get("Unknown").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RuleLibrary {
    rules: Vec<TagRule>,
}

impl RuleLibrary {
    /// Builds a library from already-compiled rules, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RuleLibraryError::DuplicateName`] when two rules share a
    /// name, or [`RuleLibraryError::NoTriggers`] when a rule has neither
    /// keywords nor patterns.
    pub fn new(rules: Vec<TagRule>) -> Result<Self, RuleLibraryError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.name().to_string()) {
                return Err(RuleLibraryError::DuplicateName {
                    name: rule.name().to_string(),
                });
            }
            if rule.keywords().is_empty() && rule.patterns().is_empty() {
                return Err(RuleLibraryError::NoTriggers {
                    name: rule.name().to_string(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Returns the built-in library of equipment, condition, location, and
    /// severity rules for field-maintenance reports.
    pub fn standard() -> Self {
        Self::from_defs(standard::defs()).expect("built-in rule library is valid")
    }

    /// Compiles raw rule definitions and builds a library from them.
    ///
    /// # Errors
    ///
    /// Returns [`RuleLibraryError::InvalidPattern`] for malformed regular
    /// expressions, plus the invariant errors from [`RuleLibrary::new`].
    pub fn from_defs(defs: Vec<RuleDef>) -> Result<Self, RuleLibraryError> {
        let rules = defs
            .into_iter()
            .map(compile)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    /// Parses a JSON array of rule definitions and builds a library.
    ///
    /// # Errors
    ///
    /// Returns [`RuleLibraryError::Parse`] on malformed JSON, plus the
    /// compilation and invariant errors from [`RuleLibrary::from_defs`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldtag::RuleLibrary;
    ///
    /// let library = RuleLibrary::from_json_str(
    ///     r#"[{ "name": "Leak", "keywords": ["leak"], "priority": 2 }]"#,
    /// )?;
    /// assert_eq!(library.len(), 1);
    /// # Ok::<(), fieldtag::RuleLibraryError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, RuleLibraryError> {
        let defs: Vec<RuleDef> = serde_json::from_str(json).map_err(RuleLibraryError::Parse)?;
        Self::from_defs(defs)
    }

    /// Reads a JSON rule file and builds a library from it.
    ///
    /// # Errors
    ///
    /// Returns [`RuleLibraryError::Io`] when the file cannot be read, plus
    /// the errors from [`RuleLibrary::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RuleLibraryError> {
        let content = fs::read_to_string(path).map_err(RuleLibraryError::Io)?;
        Self::from_json_str(&content)
    }

    /// Returns the rules in declaration order.
    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&TagRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    /// Number of rules in the library.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the library holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Compiles a raw definition into a rule, attributing pattern failures to
/// the rule that carries them.
fn compile(def: RuleDef) -> Result<TagRule, RuleLibraryError> {
    let mut patterns = Vec::with_capacity(def.patterns.len());
    for raw in &def.patterns {
        let pattern = Regex::new(raw).map_err(|source| RuleLibraryError::InvalidPattern {
            name: def.name.clone(),
            pattern: raw.clone(),
            source: Box::new(source),
        })?;
        patterns.push(pattern);
    }
    Ok(TagRule::with_description(
        def.name,
        def.keywords,
        patterns,
        def.priority,
        def.description,
    ))
}
