//! Unit/reading extraction from meter-report sentences.
//!
//! Parses free text like `"Unit 19A reads 30 cubic meter, 19B is 5 cubic
//! meter"` into ordered [`MeterReading`] records. Exact duplicate pairs are
//! dropped (first occurrence wins); the same unit reported with differing
//! values is a conflict, flagged as an error rather than resolved, so the
//! reporter can be asked for consistent numbers.
//!
//! This is the collaborator side of the crate: the tag engine never consumes
//! these records, they share the repository because both are extracted from
//! the same field reports.

use std::collections::HashSet;
use std::fmt;

use regex::Regex;
use thiserror::Error;

use crate::models::{MeterReading, ReadingSummary};

/// Matches forms like `Unit 19A reads 30 cubic meter`, `19B is 5 cubic
/// meter`, `unit 5C reading 12.5 cubic meter`. The `Unit` prefix is
/// optional; the verb is one of `reads`/`is`/`reading`.
const READING_PATTERN: &str =
    r"(?i)(?:unit\s+)?(\d+[a-z])\s+(?:reads|is|reading)\s+(\d+(?:\.\d+)?)\s+cubic\s+meter";

/// One unit reported with more than one distinct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitConflict {
    /// The unit identifier.
    pub unit: String,
    /// Every distinct value reported for it, in report order.
    pub values: Vec<i64>,
}

impl fmt::Display for UnitConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "Unit {}: {} cubic meters", self.unit, values.join(", "))
    }
}

/// Errors raised while extracting readings from a report.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// The text contained nothing shaped like a unit reading.
    #[error("no unit readings found in input")]
    NoReadings,

    /// At least one unit was reported with differing values.
    #[error(
        "conflicting readings found for the same unit(s): {}. Please provide consistent readings for each unit.",
        format_conflicts(.conflicts)
    )]
    ConflictingReadings {
        /// Each conflicted unit with its distinct values.
        conflicts: Vec<UnitConflict>,
    },
}

fn format_conflicts(conflicts: &[UnitConflict]) -> String {
    let parts: Vec<String> = conflicts.iter().map(|c| c.to_string()).collect();
    parts.join("; ")
}

/// Extracts unit/reading pairs from meter-report text.
///
/// The extraction pattern is compiled once at construction; extraction
/// itself is read-only and safe to call concurrently.
///
/// # Examples
///
/// ```
/// use fieldtag::ReadingExtractor;
///
/// let extractor = ReadingExtractor::new();
/// let readings = extractor
///     .extract("Unit 19A reads 30 cubic meter, 19B is 5 cubic meter")?;
///
/// assert_eq!(readings.len(), 2);
/// assert_eq!(readings[0].unit, "19A");
/// assert_eq!(readings[0].reading, 30);
/// assert_eq!(readings[1].unit, "19B");
/// assert_eq!(readings[1].reading, 5);
/// # Ok::<(), fieldtag::ReadingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReadingExtractor {
    pattern: Regex,
}

impl Default for ReadingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingExtractor {
    /// Creates an extractor around the built-in reading pattern.
    pub fn new() -> Self {
        // The pattern is a crate invariant, covered by tests.
        let pattern = Regex::new(READING_PATTERN).expect("built-in reading pattern is valid");
        Self { pattern }
    }

    /// Extracts readings in report order.
    ///
    /// Unit identifiers are normalized to uppercase; fractional values are
    /// truncated toward zero. Exact duplicate (unit, value) pairs are
    /// removed, first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingError::NoReadings`] when the text contains no
    /// readings, or [`ReadingError::ConflictingReadings`] when a unit is
    /// reported with more than one distinct value.
    pub fn extract(&self, text: &str) -> Result<Vec<MeterReading>, ReadingError> {
        let mut raw: Vec<MeterReading> = Vec::new();
        for caps in self.pattern.captures_iter(text) {
            let Ok(value) = caps[2].parse::<f64>() else {
                continue;
            };
            raw.push(MeterReading {
                unit: caps[1].to_uppercase(),
                reading: value.trunc() as i64,
            });
        }

        if raw.is_empty() {
            return Err(ReadingError::NoReadings);
        }

        // Drop exact duplicate pairs, first occurrence wins.
        let mut seen = HashSet::new();
        let readings: Vec<MeterReading> = raw
            .into_iter()
            .filter(|reading| seen.insert((reading.unit.clone(), reading.reading)))
            .collect();

        let conflicts = find_conflicts(&readings);
        if !conflicts.is_empty() {
            return Err(ReadingError::ConflictingReadings { conflicts });
        }

        Ok(readings)
    }

    /// Summarizes the readings extracted from a report.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`ReadingExtractor::extract`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldtag::ReadingExtractor;
    ///
    /// let extractor = ReadingExtractor::new();
    /// let summary = extractor
    ///     .summarize("10A reads 25 cubic meter, Unit 10B is 15 cubic meter")?;
    ///
    /// assert_eq!(summary.total_units, 2);
    /// assert_eq!(summary.total_reading, 40);
    /// assert_eq!(summary.average_reading, 20.0);
    /// assert_eq!(summary.unit_list, ["10A", "10B"]);
    /// # Ok::<(), fieldtag::ReadingError>(())
    /// ```
    pub fn summarize(&self, text: &str) -> Result<ReadingSummary, ReadingError> {
        let readings = self.extract(text)?;

        let total_units = readings.len();
        let total_reading: i64 = readings.iter().map(|r| r.reading).sum();
        let average_reading = if total_units == 0 {
            0.0
        } else {
            total_reading as f64 / total_units as f64
        };

        Ok(ReadingSummary {
            total_units,
            total_reading,
            average_reading,
            unit_list: readings.into_iter().map(|r| r.unit).collect(),
        })
    }
}

/// Groups deduplicated readings by unit and reports every unit that still
/// carries more than one value.
fn find_conflicts(readings: &[MeterReading]) -> Vec<UnitConflict> {
    let mut grouped: Vec<UnitConflict> = Vec::new();
    for reading in readings {
        match grouped.iter_mut().find(|group| group.unit == reading.unit) {
            Some(group) => group.values.push(reading.reading),
            None => grouped.push(UnitConflict {
                unit: reading.unit.clone(),
                values: vec![reading.reading],
            }),
        }
    }
    grouped.retain(|group| group.values.len() > 1);
    grouped
}
