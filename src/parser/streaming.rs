//! Streaming orchestration
//!
//! Tokenizes, header-checks and validates one line at a time, yielding each
//! record as soon as it is ready. The first error ends the sequence; it is
//! yielded once and every later poll returns `None`. Validation errors carry
//! [`RowIndex::Untracked`] because row positions are not counted here.
//!
//! Dropping a stream drops its line source, which closes the file.

use futures::Stream;
use std::io;
use std::iter::FusedIterator;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use tokio::io::{AsyncBufRead, Lines};
use tracing::trace;

use super::header::HeaderState;
use super::validator::validate_row;
use crate::config::ParseOptions;
use crate::error::{ParseError, Result, RowIndex};
use crate::models::Header;
use crate::schema::RowSchema;
use crate::tokenizer::Tokenizer;

/// Per-line stages shared by the blocking and async streams
#[derive(Debug)]
pub(crate) struct RowPipeline<'a, S> {
    tokenizer: Tokenizer,
    schema: &'a S,
    header: HeaderState,
}

impl<'a, S: RowSchema> RowPipeline<'a, S> {
    pub(crate) fn new(tokenizer: Tokenizer, options: &'a ParseOptions<S>) -> Self {
        Self {
            tokenizer,
            schema: &options.schema,
            header: HeaderState::new(options.has_header),
        }
    }

    /// Run one line through the stages; `None` when it yields no record
    pub(crate) fn accept(&mut self, line: &str) -> std::result::Result<Option<S::Output>, ParseError> {
        let Some(row) = self.tokenizer.tokenize(line) else {
            trace!("Dropping blank line");
            return Ok(None);
        };

        match self.header.offer(row) {
            Some(row) => validate_row(self.schema, row, RowIndex::Untracked).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn header(&self) -> Option<&Header> {
        self.header.header()
    }
}

/// Lazy record sequence over a blocking line source
pub struct RowStream<'a, L, S> {
    lines: L,
    pipeline: RowPipeline<'a, S>,
    finished: bool,
}

impl<'a, L, S: RowSchema> RowStream<'a, L, S> {
    pub(crate) fn new(lines: L, tokenizer: Tokenizer, options: &'a ParseOptions<S>) -> Self {
        Self {
            lines,
            pipeline: RowPipeline::new(tokenizer, options),
            finished: false,
        }
    }

    /// Header row, once it has been consumed
    pub fn header(&self) -> Option<&Header> {
        self.pipeline.header()
    }
}

impl<L, S> Iterator for RowStream<'_, L, S>
where
    L: Iterator<Item = io::Result<String>>,
    S: RowSchema,
{
    type Item = Result<S::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            let outcome = match line {
                Ok(line) => self.pipeline.accept(&line).map_err(Into::into),
                Err(e) => Err(e.into()),
            };

            match outcome {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }

        self.finished = true;
        None
    }
}

impl<L, S> FusedIterator for RowStream<'_, L, S>
where
    L: Iterator<Item = io::Result<String>>,
    S: RowSchema,
{
}

/// Lazy record sequence over an async line source
pub struct AsyncRowStream<'a, R, S> {
    lines: Lines<R>,
    pipeline: RowPipeline<'a, S>,
    finished: bool,
}

impl<'a, R, S: RowSchema> AsyncRowStream<'a, R, S> {
    pub(crate) fn new(lines: Lines<R>, tokenizer: Tokenizer, options: &'a ParseOptions<S>) -> Self {
        Self {
            lines,
            pipeline: RowPipeline::new(tokenizer, options),
            finished: false,
        }
    }

    /// Header row, once it has been consumed
    pub fn header(&self) -> Option<&Header> {
        self.pipeline.header()
    }
}

impl<R, S> Stream for AsyncRowStream<'_, R, S>
where
    R: AsyncBufRead + Unpin,
    S: RowSchema,
{
    type Item = Result<S::Output>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }

        loop {
            match ready!(Pin::new(&mut this.lines).poll_next_line(cx)) {
                Ok(Some(line)) => match this.pipeline.accept(&line) {
                    Ok(Some(record)) => return Poll::Ready(Some(Ok(record))),
                    Ok(None) => continue,
                    Err(e) => {
                        this.finished = true;
                        return Poll::Ready(Some(Err(e.into())));
                    }
                },
                Ok(None) => {
                    this.finished = true;
                    return Poll::Ready(None);
                }
                Err(e) => {
                    this.finished = true;
                    return Poll::Ready(Some(Err(e.into())));
                }
            }
        }
    }
}
