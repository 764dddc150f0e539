//! Shared fixtures for parser tests

use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::ParseOptions;
use crate::parser::CsvParser;
use crate::schema::{ColumnSchema, ColumnType};

pub mod batch_tests;
pub mod streaming_tests;

/// Four people, the second with a non-numeric age
pub const PEOPLE_CSV: &str = "name,age\nAlice,23\nBob,thirty\nCharlie,25\nNim,22";

/// Same people, all valid
pub const VALID_PEOPLE_CSV: &str = "name,age\nAlice,23\nCharlie,25\nNim,22\n";

/// `name` as text, `age` as a number
pub fn people_schema() -> ColumnSchema {
    ColumnSchema::new()
        .column("name", ColumnType::Text)
        .column("age", ColumnType::Number)
}

/// Parser returning raw rows with default options
pub fn raw_parser() -> CsvParser {
    CsvParser::new(ParseOptions::new()).unwrap()
}

/// Write `content` to a temporary file kept alive by the returned handle
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Build a raw row from string literals
pub fn row(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
