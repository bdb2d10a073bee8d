//! The rule library: a validated, ordered collection of tag rules.
//!
//! The library is plain data (name, keywords, patterns, priority records),
//! never code branches: it can be built programmatically, loaded from a
//! JSON file, or taken off the shelf via [`RuleLibrary::standard`].
//! All validation happens at construction; once a library exists, scoring
//! against it can never fail.

mod library;
mod standard;

pub use library::{RuleLibrary, RuleLibraryError};
