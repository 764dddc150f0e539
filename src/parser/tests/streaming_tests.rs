//! Streaming parsing tests

use futures::StreamExt;
use std::io;

use super::{PEOPLE_CSV, VALID_PEOPLE_CSV, create_temp_file, people_schema, raw_parser, row};
use crate::config::ParseOptions;
use crate::error::{RowIndex, RowparseError};
use crate::models::Value;
use crate::parser::{CsvParser, line_source};

#[test]
fn test_stream_yields_records_then_ends() {
    let parser = CsvParser::new(ParseOptions::new().with_schema(people_schema())).unwrap();
    let mut rows = parser.rows(line_source::from_text(VALID_PEOPLE_CSV));

    let first = rows.next().unwrap().unwrap();
    assert_eq!(first.get("name"), Some(&Value::Text("Alice".to_string())));
    assert_eq!(rows.header(), Some(&row(&["name", "age"])));

    assert_eq!(rows.by_ref().count(), 2);
    assert!(rows.next().is_none());
}

#[test]
fn test_stream_matches_batch() {
    let parser = CsvParser::new(ParseOptions::new().with_schema(people_schema())).unwrap();
    let text = "\nname,age\nAlice,23\n\nCharlie,25\nNim,22\n";

    let batch = parser.parse_str(text).unwrap();
    let streamed = parser
        .rows(line_source::from_text(text))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(batch.data, streamed);
}

#[test]
fn test_error_is_yielded_once() {
    let parser = CsvParser::new(ParseOptions::new().with_schema(people_schema())).unwrap();
    let mut rows = parser.rows(line_source::from_text(PEOPLE_CSV));

    assert!(rows.next().unwrap().is_ok());

    let error = rows.next().unwrap().unwrap_err();
    assert_eq!(error.as_parse_error().unwrap().row, RowIndex::Untracked);

    assert!(rows.next().is_none());
    assert!(rows.next().is_none());
}

#[test]
fn test_stream_is_lazy() {
    let lines = vec![
        Ok("name,age".to_string()),
        Ok("Alice,23".to_string()),
        Err(io::Error::other("unreachable")),
    ];

    let parser = raw_parser();
    let mut rows = parser.rows(lines);
    assert_eq!(rows.next().unwrap().unwrap(), row(&["Alice", "23"]));

    assert!(matches!(rows.next(), Some(Err(RowparseError::Io(_)))));
    assert!(rows.next().is_none());
}

#[test]
fn test_open_rows_from_file() {
    let file = create_temp_file(VALID_PEOPLE_CSV);
    let parser = raw_parser();

    let records = parser
        .open_rows(file.path())
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(records[2], row(&["Nim", "22"]));
}

#[tokio::test]
async fn test_async_stream_matches_batch() {
    let file = create_temp_file(VALID_PEOPLE_CSV);
    let parser = CsvParser::new(ParseOptions::new().with_schema(people_schema())).unwrap();

    let batch = parser.parse_file(file.path()).await.unwrap();

    let mut stream = parser.stream_file(file.path()).await.unwrap();
    let mut streamed = Vec::new();
    while let Some(record) = stream.next().await {
        streamed.push(record.unwrap());
    }

    assert_eq!(stream.header(), Some(&row(&["name", "age"])));
    assert_eq!(batch.data, streamed);
}

#[tokio::test]
async fn test_async_stream_ends_after_error() {
    let file = create_temp_file(PEOPLE_CSV);
    let parser = CsvParser::new(ParseOptions::new().with_schema(people_schema())).unwrap();

    let results: Vec<_> = parser.stream_file(file.path()).await.unwrap().collect().await;

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}
