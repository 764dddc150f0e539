//! Header extraction
//!
//! The first tokenized row optionally becomes the header. Header width is
//! never compared with data row width; rows of any width pass through.

use crate::models::{Header, RawRow};

/// Split the header off the buffered rows when requested
pub fn extract_header(mut rows: Vec<RawRow>, has_header: bool) -> (Option<Header>, Vec<RawRow>) {
    if !has_header || rows.is_empty() {
        return (None, rows);
    }

    let header = rows.remove(0);
    (Some(header), rows)
}

/// Tracks whether the next row of a stream is still the expected header
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    pending: bool,
    header: Option<Header>,
}

impl HeaderState {
    pub fn new(has_header: bool) -> Self {
        Self {
            pending: has_header,
            header: None,
        }
    }

    /// Take `row` as the header if one is still expected, otherwise hand it back
    pub fn offer(&mut self, row: RawRow) -> Option<RawRow> {
        if self.pending {
            self.pending = false;
            self.header = Some(row);
            None
        } else {
            Some(row)
        }
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }
}
