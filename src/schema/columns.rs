//! Declarative positional schema
//!
//! Describes a row as an ordered list of named, typed columns. Field `n` of
//! a row is coerced with the type of column `n`; the result is a [`Record`]
//! keyed by column name. All issues in a row are reported together.
//!
//! Schemas can be built in code or parsed from a compact specification:
//!
//! ```rust
//! use rowparse::schema::{ColumnSchema, ColumnType, RowSchema};
//!
//! let schema: ColumnSchema = "name:text,age:number".parse().unwrap();
//! let record = schema.validate(vec!["Alice".into(), "23".into()]).unwrap();
//! assert_eq!(record.get("age").and_then(|v| v.as_f64()), Some(23.0));
//!
//! let same = ColumnSchema::new()
//!     .column("name", ColumnType::Text)
//!     .column("age", ColumnType::Number);
//! assert_eq!(same.names(), schema.names());
//!
//! let codes: ColumnSchema = "code:pattern(^[A-Z]{3}$)?".parse().unwrap();
//! assert_eq!(codes.to_string(), "code:pattern(^[A-Z]{3}$)?");
//! ```

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::RowSchema;
use crate::error::{Result, RowparseError};
use crate::models::{IssueCode, RawRow, Record, ValidationIssue, Value};

/// One `name:kind[?]` or `name:pattern(<regex>)[?]` entry at the start of
/// the remaining spec, with its trailing comma. A pattern ends at the first
/// `)` followed by an optional `?` and then a comma or the end of the spec.
static COLUMN_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<name>[^:,\s][^:,]*?)\s*:\s*(?:pattern\((?P<pattern>.*?)\)|(?P<kind>[A-Za-z]+))\s*(?P<optional>\?)?\s*(?:,|$)",
    )
    .expect("column spec pattern is valid")
});

/// Target type of one column
#[derive(Debug, Clone)]
pub enum ColumnType {
    /// Field kept verbatim
    Text,
    /// Signed 64-bit integer
    Integer,
    /// Finite or infinite float, never NaN
    Number,
    /// `true`/`false`, `yes`/`no` or `1`/`0`, case-insensitive
    Boolean,
    /// Text that must match the regular expression
    Pattern(Regex),
}

impl ColumnType {
    /// Text column constrained by a regular expression
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| RowparseError::column_spec(pattern, e.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Pattern(_) => "pattern",
        }
    }

    /// Coerce one raw field, describing the failure as an issue
    fn coerce(&self, raw: &str) -> std::result::Result<Value, ValidationIssue> {
        let trimmed = raw.trim();
        let invalid_type = || {
            ValidationIssue::new(
                IssueCode::InvalidType,
                format!("expected {}, received '{}'", self.name(), raw),
            )
        };

        match self {
            Self::Text => Ok(Value::Text(raw.to_string())),
            Self::Integer => trimmed
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| invalid_type()),
            Self::Number => match trimmed.parse::<f64>() {
                Ok(value) if !value.is_nan() => Ok(Value::Number(value)),
                _ => Err(invalid_type()),
            },
            Self::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Value::Boolean(true)),
                "false" | "no" | "0" => Ok(Value::Boolean(false)),
                _ => Err(invalid_type()),
            },
            Self::Pattern(regex) => {
                if regex.is_match(raw) {
                    Ok(Value::Text(raw.to_string()))
                } else {
                    Err(ValidationIssue::new(
                        IssueCode::InvalidFormat,
                        format!("'{}' does not match /{}/", raw, regex.as_str()),
                    ))
                }
            }
        }
    }
}

impl FromStr for ColumnType {
    type Err = RowparseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(Self::Text),
            "integer" | "int" => Ok(Self::Integer),
            "number" | "float" => Ok(Self::Number),
            "boolean" | "bool" => Ok(Self::Boolean),
            other => Err(RowparseError::column_spec(
                s,
                format!(
                    "unknown column type '{}' (expected text, integer, number or boolean)",
                    other
                ),
            )),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(regex) => write!(f, "pattern({})", regex.as_str()),
            other => f.write_str(other.name()),
        }
    }
}

/// One named column
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnType,

    /// Missing or blank fields become [`Value::Null`] instead of an issue
    pub optional: bool,
}

/// Ordered list of typed columns
#[derive(Debug, Clone, Default)]
pub struct ColumnSchema {
    columns: Vec<Column>,
    allow_extra: bool,
}

impl ColumnSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required column
    pub fn column(mut self, name: impl Into<String>, kind: ColumnType) -> Self {
        self.columns.push(Column {
            name: name.into(),
            kind,
            optional: false,
        });
        self
    }

    /// Append an optional column
    pub fn optional(mut self, name: impl Into<String>, kind: ColumnType) -> Self {
        self.columns.push(Column {
            name: name.into(),
            kind,
            optional: true,
        });
        self
    }

    /// Ignore fields beyond the last column instead of reporting them
    pub fn allow_extra_fields(mut self) -> Self {
        self.allow_extra = true;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }
}

impl RowSchema for ColumnSchema {
    type Output = Record;

    fn validate(&self, fields: RawRow) -> std::result::Result<Record, Vec<ValidationIssue>> {
        let mut record = Record::with_capacity(self.columns.len());
        let mut issues = Vec::new();

        for (position, column) in self.columns.iter().enumerate() {
            match fields.get(position) {
                Some(raw) if column.optional && raw.trim().is_empty() => {
                    record.push(&column.name, Value::Null);
                }
                Some(raw) => match column.kind.coerce(raw) {
                    Ok(value) => record.push(&column.name, value),
                    Err(issue) => issues.push(issue.at_column(position)),
                },
                None if column.optional => record.push(&column.name, Value::Null),
                None => issues.push(
                    ValidationIssue::new(
                        IssueCode::MissingField,
                        format!("missing required field '{}'", column.name),
                    )
                    .at_column(position),
                ),
            }
        }

        if !self.allow_extra && fields.len() > self.columns.len() {
            issues.push(
                ValidationIssue::new(
                    IssueCode::UnexpectedField,
                    format!(
                        "expected at most {} fields, found {}",
                        self.columns.len(),
                        fields.len()
                    ),
                )
                .at_column(self.columns.len()),
            );
        }

        if issues.is_empty() {
            Ok(record)
        } else {
            Err(issues)
        }
    }
}

impl FromStr for ColumnSchema {
    type Err = RowparseError;

    /// Parse `name:kind[?],...`, e.g. `name:text,age:number,email:text?`.
    /// Pattern columns are written `code:pattern(^[A-Z]{3}$)`.
    fn from_str(spec: &str) -> std::result::Result<Self, Self::Err> {
        if spec.trim().is_empty() {
            return Err(RowparseError::column_spec(spec, "no columns given"));
        }
        if spec.trim_end().ends_with(',') {
            return Err(RowparseError::column_spec(spec, "trailing comma"));
        }

        let mut schema = ColumnSchema::new();
        let mut rest = spec;
        while !rest.trim().is_empty() {
            let captures = COLUMN_SPEC.captures(rest).ok_or_else(|| {
                let entry = rest.split(',').next().unwrap_or(rest).trim();
                RowparseError::column_spec(spec, format!("expected name:type, found '{}'", entry))
            })?;

            let name = &captures["name"];
            let kind = match captures.name("pattern") {
                Some(pattern) => ColumnType::pattern(pattern.as_str())?,
                None => captures["kind"].parse().map_err(|_| {
                    RowparseError::column_spec(
                        spec,
                        format!("unknown column type '{}' for '{}'", &captures["kind"], name),
                    )
                })?,
            };

            schema = if captures.name("optional").is_some() {
                schema.optional(name, kind)
            } else {
                schema.column(name, kind)
            };
            rest = &rest[captures[0].len()..];
        }

        Ok(schema)
    }
}

impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, column) in self.columns.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", column.name, column.kind)?;
            if column.optional {
                f.write_str("?")?;
            }
        }
        Ok(())
    }
}
