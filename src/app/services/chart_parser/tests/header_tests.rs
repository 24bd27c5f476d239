//! Tests for chart preamble parsing

use crate::Error;
use crate::app::services::chart_parser::LineCursor;
use crate::app::services::chart_parser::header::parse_header;

#[test]
fn test_parse_header_quoted_values() {
    let text = "title = \"Oakland, CA Clear Sky Chart\"\nversion = \"-humidity\"\nUTC_offset = \"-8\"\n";
    let mut cursor = LineCursor::new(text);

    let header = parse_header(&mut cursor).unwrap();
    assert_eq!(header.title, "Oakland, CA Clear Sky Chart");
    assert_eq!(header.format_version, "-humidity");
    assert_eq!(header.utc_offset, -8.0);
}

#[test]
fn test_parse_header_unquoted_offset() {
    let text = "title = \"t\"\nversion = \"1\"\nUTC_offset = -3.5\n";
    let mut cursor = LineCursor::new(text);

    let header = parse_header(&mut cursor).unwrap();
    assert_eq!(header.utc_offset, -3.5);
}

#[test]
fn test_parse_header_value_keeps_later_equals() {
    // Only the first '=' delimits the assignment
    let text = "title = \"a=b\"\nversion = \"1\"\nUTC_offset = 0\n";
    let mut cursor = LineCursor::new(text);

    let header = parse_header(&mut cursor).unwrap();
    assert_eq!(header.title, "a=b");
}

#[test]
fn test_parse_header_missing_assignment() {
    let text = "title \"no equals here\"\nversion = \"1\"\nUTC_offset = 0\n";
    let mut cursor = LineCursor::new(text);

    match parse_header(&mut cursor).unwrap_err() {
        Error::MalformedChartHeader { line, reason, .. } => {
            assert_eq!(line, 1);
            assert!(reason.contains("missing '='"));
        }
        other => panic!("expected MalformedChartHeader, got {:?}", other),
    }
}

#[test]
fn test_parse_header_non_numeric_offset() {
    let text = "title = \"t\"\nversion = \"1\"\nUTC_offset = \"west\"\n";
    let mut cursor = LineCursor::new(text);

    match parse_header(&mut cursor).unwrap_err() {
        Error::MalformedChartHeader { line, reason, .. } => {
            assert_eq!(line, 3);
            assert!(reason.contains("non-numeric"));
        }
        other => panic!("expected MalformedChartHeader, got {:?}", other),
    }
}

#[test]
fn test_parse_header_truncated() {
    let text = "title = \"t\"\n";
    let mut cursor = LineCursor::new(text);

    match parse_header(&mut cursor).unwrap_err() {
        Error::MalformedChartHeader { reason, .. } => {
            assert!(reason.contains("unexpected end of chart"));
        }
        other => panic!("expected MalformedChartHeader, got {:?}", other),
    }
}
