//! Tag classification engine for free-text issue descriptions.
//!
//! Given a report like `"Rusted valve found near compressor 2"`, the engine
//! scores every rule in a [`RuleLibrary`](crate::RuleLibrary) against the
//! text and returns the tags whose confidence clears a threshold, ranked by
//! confidence, then rule priority, then declaration order.
//!
//! The engine is a pure function of (input text, rule library, threshold):
//! it holds no per-call state, caches nothing, and never mutates the
//! library, so a single [`TagSuggester`] can be shared across threads
//! without coordination.
//!
//! # Examples
//!
//! ```
//! use fieldtag::{RuleLibrary, TagSuggester};
//!
//! let suggester = TagSuggester::new(RuleLibrary::standard());
//! let suggestion = suggester.suggest("Rusted valve found near compressor 2");
//!
//! assert_eq!(suggestion.tags[0], "Corrosion");
//! assert_eq!(
//!     suggestion.keywords,
//!     ["rusted", "valve", "found", "near", "compressor", "2"]
//! );
//! ```

mod engine;
mod eval;
mod tokenizer;

pub use engine::{DEFAULT_THRESHOLD, SuggesterConfig, TagSuggester, TagSuggesterBuilder};
pub use eval::{CorpusEntry, compare_tags, jaccard_similarity, load_corpus, precision_recall};
pub use tokenizer::extract_keywords;
