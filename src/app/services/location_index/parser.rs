//! Location line parsing and legacy text decoding
//!
//! The location list is served as ISO-8859-1 bytes, one record per line in
//! the form `key|stateName|displayName`, with no header row.

use crate::app::models::LocationEntry;
use crate::{Error, Result};

/// Decode ISO-8859-1 bytes into a String
///
/// Every ISO-8859-1 byte maps to the Unicode scalar with the same value, so
/// the decode is total and never fails.
pub fn decode_latin1(raw: &[u8]) -> String {
    raw.iter().map(|&b| b as char).collect()
}

/// Parse one location line into an entry
///
/// The line must split into exactly three pipe-delimited fields. Anything
/// else aborts the whole index build; the upstream list is machine-generated
/// and a field-count drift means the format has changed under us.
pub fn parse_line(line_no: usize, line: &str) -> Result<LocationEntry> {
    let fields: Vec<&str> = line.split('|').collect();

    if fields.len() != 3 {
        return Err(Error::malformed_location_record(line_no, line));
    }

    Ok(LocationEntry::new(fields[0], fields[1], fields[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_latin1_ascii() {
        assert_eq!(decode_latin1(b"SanFranCA|CA|San Francisco, CA"), "SanFranCA|CA|San Francisco, CA");
    }

    #[test]
    fn test_decode_latin1_high_bytes() {
        // 0xE9 is e-acute in ISO-8859-1
        let raw = b"TroisRvQC|Quebec|Trois-Rivi\xe8res, QC";
        let decoded = decode_latin1(raw);
        assert_eq!(decoded, "TroisRvQC|Quebec|Trois-Rivi\u{e8}res, QC");
    }

    #[test]
    fn test_parse_line_valid() {
        let entry = parse_line(1, "SanFranCA|CA|San Francisco, CA").unwrap();
        assert_eq!(entry.key, "SanFranCA");
        assert_eq!(entry.state, "CA");
        assert_eq!(entry.name, "San Francisco, CA");
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        let err = parse_line(7, "SanFranCA|CA").unwrap_err();
        match err {
            Error::MalformedLocationRecord { line, content } => {
                assert_eq!(line, 7);
                assert_eq!(content, "SanFranCA|CA");
            }
            other => panic!("expected MalformedLocationRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_too_many_fields() {
        assert!(parse_line(1, "a|b|c|d").is_err());
    }
}
