//! Batch orchestration
//!
//! Buffers every tokenized row of the source, extracts the header once and
//! then validates the remaining rows in order.

use std::io;
use tracing::debug;

use super::header::extract_header;
use super::validator::validate_rows;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::models::{ParsedCsv, RawRow};
use crate::schema::RowSchema;
use crate::tokenizer::Tokenizer;

/// Accumulates tokenized rows until the source is drained
#[derive(Debug)]
pub struct RowBuffer {
    tokenizer: Tokenizer,
    rows: Vec<RawRow>,
    lines_read: usize,
}

impl RowBuffer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            rows: Vec::new(),
            lines_read: 0,
        }
    }

    /// Tokenize and keep one line; dropped lines leave no row
    pub fn push_line(&mut self, line: &str) {
        self.lines_read += 1;
        if let Some(row) = self.tokenizer.tokenize(line) {
            self.rows.push(row);
        }
    }

    /// Extract the header and validate the buffered rows
    pub fn finish<S: RowSchema>(self, options: &ParseOptions<S>) -> Result<ParsedCsv<S::Output>> {
        debug!(
            "Buffered {} rows from {} lines ({} dropped)",
            self.rows.len(),
            self.lines_read,
            self.lines_read - self.rows.len()
        );

        let (header, rows) = extract_header(self.rows, options.has_header);
        let data = validate_rows(&options.schema, rows)?;
        Ok(ParsedCsv { header, data })
    }
}

/// Parse a complete line source into a batch result
pub fn parse_lines<I, S>(
    lines: I,
    tokenizer: Tokenizer,
    options: &ParseOptions<S>,
) -> Result<ParsedCsv<S::Output>>
where
    I: IntoIterator<Item = io::Result<String>>,
    S: RowSchema,
{
    let mut buffer = RowBuffer::new(tokenizer);
    for line in lines {
        buffer.push_line(&line?);
    }
    buffer.finish(options)
}
