//! End-to-end reading extraction over full report sentences.

use anyhow::Result;
use fieldtag::{MeterReading, ReadingError, ReadingExtractor};

#[test]
fn multi_unit_report_extracts_in_order() -> Result<()> {
    let extractor = ReadingExtractor::new();
    let readings =
        extractor.extract("Unit 19A reads 30 cubic meter, 19B is 5 cubic meter")?;

    assert_eq!(
        readings,
        vec![
            MeterReading {
                unit: "19A".to_string(),
                reading: 30,
            },
            MeterReading {
                unit: "19B".to_string(),
                reading: 5,
            },
        ]
    );
    Ok(())
}

#[test]
fn readings_serialize_to_collaborator_contract() -> Result<()> {
    let extractor = ReadingExtractor::new();
    let readings = extractor
        .extract("10A reads 25 cubic meter, Unit 10B is 15 cubic meter")?;

    let json = serde_json::to_value(&readings)?;
    assert_eq!(
        json,
        serde_json::json!([
            { "unit": "10A", "reading": 25 },
            { "unit": "10B", "reading": 15 },
        ])
    );
    Ok(())
}

#[test]
fn single_unit_report_round_trips() -> Result<()> {
    let extractor = ReadingExtractor::new();
    let readings = extractor.extract("Unit 5C reads 100 cubic meter")?;

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].unit, "5C");
    assert_eq!(readings[0].reading, 100);
    Ok(())
}

#[test]
fn surrounding_prose_does_not_disturb_extraction() -> Result<()> {
    let extractor = ReadingExtractor::new();
    let readings = extractor.extract(
        "During the morning walkdown, Unit 12A reads 48 cubic meter; later \
         the operator confirmed 12B is 7 cubic meter before lunch.",
    )?;

    let units: Vec<&str> = readings.iter().map(|r| r.unit.as_str()).collect();
    assert_eq!(units, ["12A", "12B"]);
    Ok(())
}

#[test]
fn conflicting_report_is_rejected_with_detail() {
    let extractor = ReadingExtractor::new();
    let error = extractor
        .extract(
            "Unit 3A reads 10 cubic meter, Unit 3A reads 12 cubic meter, \
             4B is 9 cubic meter",
        )
        .unwrap_err();

    match error {
        ReadingError::ConflictingReadings { ref conflicts } => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].unit, "3A");
            assert_eq!(conflicts[0].values, [10, 12]);
        }
        ref other => panic!("expected conflict error, got {other:?}"),
    }
    assert!(error.to_string().contains("Unit 3A: 10, 12 cubic meters"));
}

#[test]
fn repeated_identical_readings_collapse_silently() -> Result<()> {
    let extractor = ReadingExtractor::new();
    let readings = extractor.extract(
        "Unit 8A reads 14 cubic meter, Unit 8A reads 14 cubic meter, \
         8B is 3 cubic meter",
    )?;

    assert_eq!(readings.len(), 2);
    Ok(())
}

#[test]
fn summary_matches_extracted_readings() -> Result<()> {
    let extractor = ReadingExtractor::new();
    let summary =
        extractor.summarize("Unit 19A reads 30 cubic meter, 19B is 5 cubic meter")?;

    assert_eq!(summary.total_units, 2);
    assert_eq!(summary.total_reading, 35);
    assert_eq!(summary.average_reading, 17.5);
    assert_eq!(summary.unit_list, ["19A", "19B"]);
    Ok(())
}
