//! Batch parsing tests

use std::io::{self, Cursor};
use std::path::Path;

use super::{PEOPLE_CSV, VALID_PEOPLE_CSV, create_temp_file, people_schema, raw_parser, row};
use crate::config::ParseOptions;
use crate::error::{RowIndex, RowparseError};
use crate::models::Value;
use crate::parser::CsvParser;
use crate::tokenizer::TokenizerStrategy;

fn people_parser() -> CsvParser<crate::schema::ColumnSchema> {
    CsvParser::new(ParseOptions::new().with_schema(people_schema())).unwrap()
}

#[test]
fn test_first_row_becomes_header() {
    let parsed = people_parser().parse_str(VALID_PEOPLE_CSV).unwrap();

    assert_eq!(parsed.header, Some(row(&["name", "age"])));
    assert_eq!(parsed.len(), 3);
    assert_eq!(
        parsed.data[0].get("name"),
        Some(&Value::Text("Alice".to_string()))
    );
    assert_eq!(parsed.data[0].get("age"), Some(&Value::Number(23.0)));
}

#[test]
fn test_failure_reports_row_after_header() {
    let error = people_parser().parse_str(PEOPLE_CSV).unwrap_err();

    let parse_error = error.as_parse_error().unwrap();
    assert_eq!(parse_error.row, RowIndex::Line(2));
    assert!(error.to_string().contains("thirty"));
}

#[test]
fn test_without_header_every_row_is_data() {
    let parser = CsvParser::new(ParseOptions::new().with_header(false)).unwrap();
    let parsed = parser.parse_str("name,age\nAlice,23\n").unwrap();

    assert_eq!(parsed.header, None);
    assert_eq!(parsed.data, vec![row(&["name", "age"]), row(&["Alice", "23"])]);
}

#[test]
fn test_blank_lines_are_dropped_before_header_extraction() {
    let parser = raw_parser();
    let parsed = parser.parse_str("\n   \nname,age\n\nAlice,23\n\n").unwrap();

    assert_eq!(parsed.header, Some(row(&["name", "age"])));
    assert_eq!(parsed.data, vec![row(&["Alice", "23"])]);
}

#[test]
fn test_row_index_skips_blank_lines() {
    let error = people_parser()
        .parse_str("name,age\n\nAlice,23\n\n\nBob,thirty\n")
        .unwrap_err();

    assert_eq!(error.as_parse_error().unwrap().row, RowIndex::Line(2));
}

#[test]
fn test_empty_source() {
    let parsed = raw_parser().parse_str("").unwrap();
    assert_eq!(parsed.header, None);
    assert!(parsed.is_empty());

    let parsed = raw_parser().parse_str("name,age\n").unwrap();
    assert_eq!(parsed.header, Some(row(&["name", "age"])));
    assert!(parsed.is_empty());
}

#[test]
fn test_width_mismatch_is_not_an_error() {
    let parsed = raw_parser()
        .parse_str("name,age\nAlice\nBob,30,extra\n")
        .unwrap();

    assert_eq!(parsed.data, vec![row(&["Alice"]), row(&["Bob", "30", "extra"])]);
}

#[test]
fn test_strategy_and_separator_are_applied() {
    let options = ParseOptions::new()
        .with_strategy(TokenizerStrategy::Naive)
        .with_separator(b';');
    let parser = CsvParser::new(options).unwrap();
    let parsed = parser.parse_str("a;\"b;c\"\n").unwrap();

    assert_eq!(parsed.header, Some(row(&["a", "\"b", "c\""])));

    let parser = CsvParser::new(ParseOptions::new().with_separator(b';')).unwrap();
    let parsed = parser.parse_str("a;\"b;c\"\n").unwrap();
    assert_eq!(parsed.header, Some(row(&["a", "b;c"])));
}

#[test]
fn test_invalid_separator_is_rejected() {
    let error = CsvParser::new(ParseOptions::new().with_separator(b'"')).unwrap_err();
    assert!(matches!(error, RowparseError::Configuration { .. }));

    let error = CsvParser::new(ParseOptions::new().with_separator(0xc3)).unwrap_err();
    assert!(matches!(error, RowparseError::Configuration { .. }));
}

#[test]
fn test_parsing_is_repeatable() {
    let parser = people_parser();
    let first = parser.parse_str(VALID_PEOPLE_CSV).unwrap();
    let second = parser.parse_str(VALID_PEOPLE_CSV).unwrap();

    assert_eq!(first.header, second.header);
    assert_eq!(first.data, second.data);
}

#[test]
fn test_io_error_is_passed_through() {
    let lines = vec![
        Ok("name,age".to_string()),
        Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")),
        Ok("Alice,23".to_string()),
    ];

    let error = raw_parser().parse_lines(lines).unwrap_err();
    match error {
        RowparseError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_parse_reader() {
    let parsed = raw_parser()
        .parse_reader(Cursor::new("name,age\r\nAlice,23\r\n"))
        .unwrap();

    assert_eq!(parsed.data, vec![row(&["Alice", "23"])]);
}

#[tokio::test]
async fn test_parse_file() {
    let file = create_temp_file(VALID_PEOPLE_CSV);
    let parsed = people_parser().parse_file(file.path()).await.unwrap();

    assert_eq!(parsed.header, Some(row(&["name", "age"])));
    assert_eq!(parsed.len(), 3);
}

#[tokio::test]
async fn test_parse_missing_file() {
    let error = people_parser()
        .parse_file(Path::new("/nonexistent/people.csv"))
        .await
        .unwrap_err();

    assert!(matches!(error, RowparseError::Io(_)));
}
