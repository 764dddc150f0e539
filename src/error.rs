//! Error handling for row parsing operations.
//!
//! Provides the crate error type and the row-addressable [`ParseError`]
//! raised when a schema rejects a row.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::VALIDATION_FAILED_MESSAGE;
use crate::models::ValidationIssue;

#[derive(Error, Debug)]
pub enum RowparseError {
    /// Line source failures are passed through untouched
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to read config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid column specification '{spec}': {reason}")]
    ColumnSpec { spec: String, reason: String },
}

impl RowparseError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a column specification error
    pub fn column_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ColumnSpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// The validation failure, if this error is one
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(error) => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RowparseError>;

/// Position of a failing row.
///
/// Batch parsing knows the exact one-based index among the validated rows
/// (after header removal). The streaming parser does not track it and
/// reports [`RowIndex::Untracked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowIndex {
    Line(usize),
    Untracked,
}

impl RowIndex {
    /// One-based index, when tracked
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Line(index) => Some(*index),
            Self::Untracked => None,
        }
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(index) => write!(f, "{}", index),
            Self::Untracked => f.write_str("unknown"),
        }
    }
}

/// A schema rejected a row
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message} (row {row})")]
pub struct ParseError {
    pub row: RowIndex,
    pub message: String,
    pub issues: Vec<ValidationIssue>,
}

impl ParseError {
    /// Build the error for a rejected row from the schema's issue list
    pub fn validation(row: RowIndex, issues: Vec<ValidationIssue>) -> Self {
        let details = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        let message = if details.is_empty() {
            VALIDATION_FAILED_MESSAGE.to_string()
        } else {
            format!("{}: {}", VALIDATION_FAILED_MESSAGE, details)
        };

        Self {
            row,
            message,
            issues,
        }
    }
}
