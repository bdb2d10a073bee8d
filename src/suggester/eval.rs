//! Evaluation helpers for rule-library tuning.
//!
//! Utilities for measuring suggestion quality against a fixture corpus of
//! field reports with known expected tags, used when extending or reweighing
//! the rule set.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Test corpus entry structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// The issue description to classify.
    pub description: String,
    /// Expected tags in expected rank order.
    pub expected_tags: Vec<String>,
    /// Notes about this test case.
    pub notes: String,
}

/// Loads the test corpus from the fixtures directory.
///
/// # Arguments
///
/// * `corpus_path` - Optional path to corpus file. If None, uses the default
///   location under `tests/fixtures/`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_corpus(
    corpus_path: Option<PathBuf>,
) -> Result<Vec<CorpusEntry>, Box<dyn std::error::Error>> {
    let path = corpus_path.unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("tag_corpus.json")
    });

    let content = fs::read_to_string(&path)?;
    let entries: Vec<CorpusEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

/// Calculates Jaccard similarity between two sets of tags.
///
/// Intersection size over union size: 0.0 for disjoint sets, 1.0 for
/// identical sets (two empty sets count as identical).
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use fieldtag::suggester::jaccard_similarity;
///
/// let expected: HashSet<String> = ["Corrosion", "Valve"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let actual: HashSet<String> = ["Corrosion", "Leak"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// // Intersection 1, union 3.
/// assert!((jaccard_similarity(&expected, &actual) - 1.0 / 3.0).abs() < 1e-9);
/// ```
pub fn jaccard_similarity(expected: &HashSet<String>, actual: &HashSet<String>) -> f64 {
    if expected.is_empty() && actual.is_empty() {
        return 1.0;
    }

    let intersection = expected.intersection(actual).count();
    let union = expected.union(actual).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Calculates precision and recall for tag suggestion.
///
/// - Precision: fraction of suggested tags that were expected.
/// - Recall: fraction of expected tags that were suggested.
///
/// Empty sets are treated as perfect on their own axis.
pub fn precision_recall(expected: &HashSet<String>, actual: &HashSet<String>) -> (f64, f64) {
    let true_positives = expected.intersection(actual).count();
    let false_positives = actual.difference(expected).count();
    let false_negatives = expected.difference(actual).count();

    let precision = if actual.is_empty() {
        if expected.is_empty() { 1.0 } else { 0.0 }
    } else {
        true_positives as f64 / (true_positives + false_positives) as f64
    };

    let recall = if expected.is_empty() {
        if actual.is_empty() { 1.0 } else { 0.0 }
    } else {
        true_positives as f64 / (true_positives + false_negatives) as f64
    };

    (precision, recall)
}

/// Compares expected tags with suggested tags, ignoring rank.
///
/// # Returns
///
/// Tuple of (jaccard_similarity, precision, recall) scores.
pub fn compare_tags(expected: &[String], actual: &[String]) -> (f64, f64, f64) {
    let expected_set: HashSet<String> = expected.iter().cloned().collect();
    let actual_set: HashSet<String> = actual.iter().cloned().collect();

    let jaccard = jaccard_similarity(&expected_set, &actual_set);
    let (precision, recall) = precision_recall(&expected_set, &actual_set);

    (jaccard, precision, recall)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> HashSet<String> {
        tags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn jaccard_identical_sets_score_one() {
        let tags = set(&["Corrosion", "Valve"]);
        assert_eq!(jaccard_similarity(&tags, &tags), 1.0);
    }

    #[test]
    fn jaccard_disjoint_sets_score_zero() {
        assert_eq!(jaccard_similarity(&set(&["Valve"]), &set(&["Leak"])), 0.0);
    }

    #[test]
    fn jaccard_partial_overlap() {
        let expected = set(&["Corrosion", "Valve", "Compressor"]);
        let actual = set(&["Corrosion", "Valve", "Leak"]);
        // Intersection 2, union 4.
        assert_eq!(jaccard_similarity(&expected, &actual), 0.5);
    }

    #[test]
    fn jaccard_of_empty_sets_is_one() {
        assert_eq!(jaccard_similarity(&set(&[]), &set(&[])), 1.0);
    }

    #[test]
    fn precision_recall_perfect_match() {
        let tags = set(&["Noise", "Compressor"]);
        assert_eq!(precision_recall(&tags, &tags), (1.0, 1.0));
    }

    #[test]
    fn precision_recall_partial_match() {
        let expected = set(&["Corrosion", "Valve", "Compressor"]);
        let actual = set(&["Corrosion", "Valve", "Leak"]);
        // TP 2, FP 1, FN 1.
        let (precision, recall) = precision_recall(&expected, &actual);
        assert!((precision - 2.0 / 3.0).abs() < 1e-9);
        assert!((recall - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn precision_recall_empty_actual() {
        let (precision, recall) = precision_recall(&set(&["Valve"]), &set(&[]));
        assert_eq!(precision, 0.0);
        assert_eq!(recall, 0.0);
    }

    #[test]
    fn compare_tags_combines_metrics_and_ignores_rank() {
        let expected = vec!["Corrosion".to_string(), "Valve".to_string()];
        let actual = vec!["Valve".to_string(), "Corrosion".to_string()];

        let (jaccard, precision, recall) = compare_tags(&expected, &actual);
        assert_eq!(jaccard, 1.0);
        assert_eq!(precision, 1.0);
        assert_eq!(recall, 1.0);
    }
}
