use serde::{Deserialize, Serialize};

/// One extracted unit/reading pair.
///
/// Serializes to the collaborator wire shape
/// `{ "unit": "19A", "reading": 30 }`. Readings are whole cubic meters;
/// fractional values in the source text are truncated toward zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeterReading {
    /// Unit identifier, e.g. `19A`. Normalized to uppercase.
    pub unit: String,
    /// Reading value in whole cubic meters.
    pub reading: i64,
}

/// Aggregate view over the readings extracted from one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingSummary {
    /// Number of distinct units.
    pub total_units: usize,
    /// Sum of all readings.
    pub total_reading: i64,
    /// Mean reading across units; 0.0 when there are no units.
    pub average_reading: f64,
    /// Unit identifiers in extraction order.
    pub unit_list: Vec<String>,
}
