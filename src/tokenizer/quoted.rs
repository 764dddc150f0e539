//! Quote-aware strategy without escapes.
//!
//! A field opening with a quote runs to the next quote, separators included.
//! There is no escape: an inner quote closes the span and the remainder
//! starts a new field.

use super::field::{closing_quote, next_separator, normalize_field};
use crate::constants::QUOTE;
use crate::models::RawRow;

pub(super) fn tokenize(line: &str, separator: u8) -> RawRow {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;

    loop {
        if start >= bytes.len() {
            // Line ended right after a separator
            fields.push(String::new());
            break;
        }

        if bytes[start] == QUOTE {
            let Some(close) = closing_quote(bytes, start, false) else {
                fields.push(normalize_field(&line[start..]));
                break;
            };

            let end = close + 1;
            fields.push(normalize_field(&line[start..end]));
            if end >= bytes.len() {
                break;
            }
            start = if bytes[end] == separator { end + 1 } else { end };
            continue;
        }

        let end = next_separator(bytes, start, separator);
        fields.push(normalize_field(&line[start..end]));
        if end >= bytes.len() {
            break;
        }
        start = end + 1;
    }

    fields
}
