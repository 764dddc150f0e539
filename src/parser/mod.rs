//! Parse orchestration
//!
//! Composes a line source, the tokenizer, header handling and a schema.
//! Two modes share those stages:
//!
//! - **Batch**: the whole source is read before any record is returned.
//!   Validation failures report the exact one-based row index, counted
//!   after header removal.
//! - **Streaming**: one record per line as it is read, lazily, with the
//!   first error ending the sequence.
//!
//! ```
//! use rowparse::{CsvParser, ParseOptions};
//!
//! let parser = CsvParser::new(ParseOptions::new()).unwrap();
//! let parsed = parser.parse_str("name,age\nAlice,23\n").unwrap();
//! assert_eq!(parsed.header, Some(vec!["name".to_string(), "age".to_string()]));
//! assert_eq!(parsed.data, vec![vec!["Alice".to_string(), "23".to_string()]]);
//! ```

pub mod batch;
pub mod header;
pub mod line_source;
pub mod streaming;
pub mod validator;

#[cfg(test)]
pub mod tests;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tokio::io::BufReader as AsyncBufReader;
use tracing::info;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::models::ParsedCsv;
use crate::schema::{Passthrough, RowSchema};
use crate::tokenizer::Tokenizer;
use batch::RowBuffer;
pub use streaming::{AsyncRowStream, RowStream};

/// Parser bound to one set of options
#[derive(Debug, Clone)]
pub struct CsvParser<S = Passthrough> {
    options: ParseOptions<S>,
    tokenizer: Tokenizer,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            options: ParseOptions::default(),
            tokenizer: Tokenizer::default(),
        }
    }
}

impl<S: RowSchema> CsvParser<S> {
    /// Create a parser, rejecting unusable separators up front
    pub fn new(options: ParseOptions<S>) -> Result<Self> {
        let tokenizer = options.tokenizer()?;
        Ok(Self { options, tokenizer })
    }

    pub fn options(&self) -> &ParseOptions<S> {
        &self.options
    }

    // ========================================================================
    // Batch
    // ========================================================================

    /// Drain a line source and return the header plus every validated record
    pub fn parse_lines<I>(&self, lines: I) -> Result<ParsedCsv<S::Output>>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        batch::parse_lines(lines, self.tokenizer, &self.options)
    }

    pub fn parse_str(&self, text: &str) -> Result<ParsedCsv<S::Output>> {
        self.parse_lines(line_source::from_text(text))
    }

    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParsedCsv<S::Output>> {
        self.parse_lines(line_source::from_reader(reader))
    }

    /// Read a whole file asynchronously, then parse it
    pub async fn parse_file(&self, path: &Path) -> Result<ParsedCsv<S::Output>> {
        info!("Parsing {}", path.display());

        let mut lines = line_source::open_async(path).await?;
        let mut buffer = RowBuffer::new(self.tokenizer);
        while let Some(line) = lines.next_line().await? {
            buffer.push_line(&line);
        }

        let parsed = buffer.finish(&self.options)?;
        info!("Parsed {} records from {}", parsed.len(), path.display());
        Ok(parsed)
    }

    // ========================================================================
    // Streaming
    // ========================================================================

    /// Lazily parse a blocking line source
    pub fn rows<I>(&self, lines: I) -> RowStream<'_, I::IntoIter, S>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        RowStream::new(lines.into_iter(), self.tokenizer, &self.options)
    }

    /// Open a file and stream it on the calling thread
    pub fn open_rows(&self, path: &Path) -> Result<RowStream<'_, io::Lines<BufReader<File>>, S>> {
        info!("Streaming {}", path.display());
        Ok(self.rows(line_source::open(path)?))
    }

    /// Open a file and stream it asynchronously
    pub async fn stream_file(
        &self,
        path: &Path,
    ) -> Result<AsyncRowStream<'_, AsyncBufReader<tokio::fs::File>, S>> {
        info!("Streaming {}", path.display());
        let lines = line_source::open_async(path).await?;
        Ok(AsyncRowStream::new(lines, self.tokenizer, &self.options))
    }
}
