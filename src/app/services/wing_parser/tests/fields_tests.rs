//! Tests for the wing field grammar

use super::super::fields::{FieldMatch, FieldValue, WING_FIELDS, WingField, scan_chunk};
use super::station_chunk;
use crate::app::models::WingStation;

fn parsed(matches: &[FieldMatch], field: WingField) -> Option<&FieldValue> {
    matches.iter().find_map(|m| match m {
        FieldMatch::Parsed(f, value) if *f == field => Some(value),
        _ => None,
    })
}

#[test]
fn test_grammar_covers_every_field_once() {
    assert_eq!(WING_FIELDS.len(), 12);
    for (i, spec) in WING_FIELDS.iter().enumerate() {
        assert!(
            WING_FIELDS[i + 1..].iter().all(|other| other.field != spec.field),
            "{:?} listed twice",
            spec.field
        );
    }
}

#[test]
fn test_scan_full_chunk() {
    let chunk = station_chunk(2, [0.1, -2.5, 0.3], [1.1, -2.5, 0.3], 1.0);
    let matches = scan_chunk(&chunk);

    assert_eq!(matches.len(), 12);
    assert_eq!(
        parsed(&matches, WingField::AirfoilFileName),
        Some(&FieldValue::Text("AirfoilFile_2.dat".to_string()))
    );
    assert_eq!(
        parsed(&matches, WingField::XSecIndex),
        Some(&FieldValue::Integer(2))
    );
    assert_eq!(
        parsed(&matches, WingField::LeadingEdge),
        Some(&FieldValue::Triple([0.1, -2.5, 0.3]))
    );
    assert_eq!(
        parsed(&matches, WingField::GlobalU),
        Some(&FieldValue::Float(2.5))
    );
}

#[test]
fn test_text_fields_are_trimmed() {
    let matches = scan_chunk("Geom Name,    Main Wing   \r\n");
    assert_eq!(
        parsed(&matches, WingField::GeomName),
        Some(&FieldValue::Text("Main Wing".to_string()))
    );
}

#[test]
fn test_first_occurrence_wins() {
    let matches = scan_chunk("Chord, 1.5\nChord, 2.5\n");
    assert_eq!(
        parsed(&matches, WingField::Chord),
        Some(&FieldValue::Float(1.5))
    );
}

#[test]
fn test_unconvertible_triple_is_reported() {
    let matches = scan_chunk("Leading Edge Point, 1.0.0, 2.0, 3.0\n");
    assert_eq!(matches.len(), 1);
    assert!(matches!(
        &matches[0],
        FieldMatch::Unparsed(WingField::LeadingEdge, _)
    ));
}

#[test]
fn test_chunk_without_labels_matches_nothing() {
    assert!(scan_chunk("just a comment\n1, 2, 3\n").is_empty());
}

#[test]
fn test_apply_ignores_mismatched_kind() {
    let mut station = WingStation::default();
    station.apply(WingField::Chord, FieldValue::Text("wide".to_string()));
    assert_eq!(station.chord, None);

    station.apply(WingField::Chord, FieldValue::Float(0.75));
    assert_eq!(station.chord, Some(0.75));
}
