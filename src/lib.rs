//! fieldtag extracts structured facts from short natural-language field
//! reports: it classifies issue descriptions against a rule library of
//! tagged keyword/pattern triggers, and parses unit meter readings out of
//! report sentences.
//!
//! The crate is a pure library. Both engines are stateless per call and
//! hold only immutable data after construction, so they can be shared
//! across threads without locking.
//!
//! # Examples
//!
//! ```
//! use fieldtag::{ReadingExtractor, RuleLibrary, TagSuggester};
//!
//! let suggester = TagSuggester::new(RuleLibrary::standard());
//! let suggestion = suggester.suggest("Loud grinding noise from pump station");
//! assert_eq!(suggestion.tags[0], "Noise");
//!
//! let extractor = ReadingExtractor::new();
//! let readings = extractor.extract("Unit 19A reads 30 cubic meter")?;
//! assert_eq!(readings[0].unit, "19A");
//! # Ok::<(), fieldtag::ReadingError>(())
//! ```

pub mod models;
pub mod readings;
pub mod rules;
pub mod suggester;

pub use models::{Explanation, MeterReading, ReadingSummary, RuleDef, Suggestion, TagRule};
pub use readings::{ReadingError, ReadingExtractor, UnitConflict};
pub use rules::{RuleLibrary, RuleLibraryError};
pub use suggester::{DEFAULT_THRESHOLD, SuggesterConfig, TagSuggester, TagSuggesterBuilder};
