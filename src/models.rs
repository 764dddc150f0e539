//! Core data structures for parsed rows.
//!
//! Defines raw rows, headers, batch results, typed cell values and the
//! validation issues reported by schemas.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Fields of one line after tokenization, before any validation
pub type RawRow = Vec<String>;

/// Column names taken from the first row
pub type Header = Vec<String>;

/// Complete result of a batch parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedCsv<T> {
    /// First row, when header extraction is enabled and the input has rows
    pub header: Option<Header>,

    /// Remaining rows, raw or validated
    pub data: Vec<T>,
}

impl<T> ParsedCsv<T> {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Category of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Row has fewer fields than the schema requires
    MissingField,
    /// Row has more fields than the schema accepts
    UnexpectedField,
    /// Field could not be coerced to the column type
    InvalidType,
    /// Field did not match the column pattern
    InvalidFormat,
    /// Raised by a hand-written validator
    Custom,
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingField => "missing_field",
            Self::UnexpectedField => "unexpected_field",
            Self::InvalidType => "invalid_type",
            Self::InvalidFormat => "invalid_format",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// One problem a schema found in a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,

    /// Zero-based field position, when the issue concerns one field
    pub column: Option<usize>,

    pub message: String,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            column: None,
            message: message.into(),
        }
    }

    /// Shorthand for a [`IssueCode::Custom`] issue
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(IssueCode::Custom, message)
    }

    /// Attach the zero-based field position
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "[{}] column {}: {}", self.code, column, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Typed cell value produced by a declarative schema
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric view of integer and number cells
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{:?}", text),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Number(value) => write!(f, "{}", value),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Named cells of a validated row, in column order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    cells: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.cells.push((name.into(), value));
    }

    /// Look up a cell by column name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (position, (name, value)) in self.cells.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lookup_and_order() {
        let record: Record = [
            ("name", Value::Text("Alice".to_string())),
            ("age", Value::Number(23.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("name").and_then(Value::as_str), Some("Alice"));
        assert_eq!(record.get("age").and_then(Value::as_f64), Some(23.0));
        assert!(record.get("email").is_none());

        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["name", "age"]);
        assert_eq!(record.to_string(), "{ name: \"Alice\", age: 23 }");
    }

    #[test]
    fn test_record_serializes_as_object() {
        let mut record = Record::new();
        record.push("name", Value::Text("Bob".to_string()));
        record.push("age", Value::Integer(30));
        record.push("email", Value::Null);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Bob","age":30,"email":null}"#);
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::new(IssueCode::MissingField, "expected 2 fields").at_column(1);
        assert_eq!(issue.to_string(), "[missing_field] column 1: expected 2 fields");

        let issue = ValidationIssue::custom("age out of range");
        assert_eq!(issue.to_string(), "[custom] age out of range");
    }
}
