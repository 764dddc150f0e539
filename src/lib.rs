//! Rowparse Library
//!
//! Parses line-oriented delimited text (CSV-like) into rows of fields,
//! optionally validating every row against a schema.
//!
//! This library provides:
//! - Four interchangeable tokenizer strategies with different quoting support
//! - Optional header extraction from the first row
//! - A pluggable [`RowSchema`] trait, with declarative column schemas
//! - Batch parsing with exact failing-row indices
//! - Lazy streaming over blocking and async line sources
//!
//! ```
//! use rowparse::{ColumnSchema, CsvParser, ParseOptions, Value};
//!
//! let schema: ColumnSchema = "name:text,age:number".parse().unwrap();
//! let parser = CsvParser::new(ParseOptions::new().with_schema(schema)).unwrap();
//!
//! let parsed = parser.parse_str("name,age\nAlice,23\n").unwrap();
//! assert_eq!(parsed.data[0].get("age"), Some(&Value::Number(23.0)));
//!
//! let error = parser.parse_str("name,age\nAlice,23\nBob,thirty\n").unwrap_err();
//! assert_eq!(error.as_parse_error().unwrap().row.line(), Some(2));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod schema;
pub mod tokenizer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{ParseOptions, ParserConfig};
pub use error::{ParseError, Result, RowIndex, RowparseError};
pub use models::{Header, IssueCode, ParsedCsv, RawRow, Record, ValidationIssue, Value};
pub use parser::{AsyncRowStream, CsvParser, RowStream};
pub use schema::{ColumnSchema, ColumnType, Passthrough, RowSchema, from_fn};
pub use tokenizer::{Tokenizer, TokenizerStrategy};
