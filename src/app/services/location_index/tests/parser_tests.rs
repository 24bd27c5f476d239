//! Tests for location index construction

use super::sample_location_list;
use crate::Error;
use crate::app::services::location_index::LocationIndex;

#[test]
fn test_build_from_text() {
    let index = LocationIndex::from_text(sample_location_list()).unwrap();

    assert_eq!(index.entry_count(), 6);
    assert_eq!(index.state_count(), 3);
    assert!(index.contains_state("ca"));
    assert!(index.contains_state("OREGON"));
    assert!(!index.contains_state("nevada"));
}

#[test]
fn test_build_from_latin1_bytes() {
    let mut raw: Vec<u8> = Vec::new();
    raw.extend_from_slice(b"SanFranCA|CA|San Francisco, CA\n");
    raw.extend_from_slice(b"TroisRvQC|Quebec|Trois-Rivi\xe8res, QC\n");

    let index = LocationIndex::build(&raw).unwrap();

    assert_eq!(index.entry_count(), 2);
    let matches = index.search_city("rivi\u{e8}res");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].key, "TroisRvQC");
}

#[test]
fn test_state_order_matches_source_order() {
    let index = LocationIndex::from_text(sample_location_list()).unwrap();

    let keys: Vec<&str> = index
        .lookup_state("ca")
        .iter()
        .map(|e| e.key.as_str())
        .collect();

    assert_eq!(keys, vec!["SanFranCA", "OaklandCA", "SnJosCA"]);
}

#[test]
fn test_duplicate_display_name_last_write_wins() {
    let index = LocationIndex::from_text(sample_location_list()).unwrap();

    // Both Portland entries survive in the state view...
    assert_eq!(index.lookup_state("oregon").len(), 2);

    // ...but the city view keeps only the later one
    let matches = index.search_city("portland");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].key, "PrtlndORb");
}

#[test]
fn test_malformed_line_aborts_build() {
    let text = "SanFranCA|CA|San Francisco, CA\nOaklandCA|CA\n";
    let err = LocationIndex::from_text(text).unwrap_err();

    match err {
        Error::MalformedLocationRecord { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "OaklandCA|CA");
        }
        other => panic!("expected MalformedLocationRecord, got {:?}", other),
    }
}

#[test]
fn test_empty_lines_skipped() {
    let text = "SanFranCA|CA|San Francisco, CA\n\nOaklandCA|CA|Oakland, CA\n";
    let index = LocationIndex::from_text(text).unwrap();
    assert_eq!(index.entry_count(), 2);
}

#[test]
fn test_empty_input_builds_empty_index() {
    let index = LocationIndex::from_text("").unwrap();
    assert_eq!(index.entry_count(), 0);
    assert_eq!(index.state_count(), 0);
}
