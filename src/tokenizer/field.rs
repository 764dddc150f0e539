//! Field-level helpers shared by the tokenizer strategies
//!
//! Scanning a line is strategy-specific; what happens to a field once it
//! has been cut out of the line is not.

use crate::constants::{DOUBLED_QUOTE, QUOTE, QUOTE_STR};

/// Normalize one extracted field.
///
/// A field wrapped in a single pair of quotes loses exactly that outer pair
/// and has surrounding whitespace trimmed from the unwrapped value. Doubled
/// quotes decode to one literal quote in every field. Unquoted fields keep
/// their whitespace.
pub fn normalize_field(raw: &str) -> String {
    match strip_outer_quotes(raw) {
        Some(inner) => inner.replace(DOUBLED_QUOTE, QUOTE_STR).trim().to_string(),
        None => raw.replace(DOUBLED_QUOTE, QUOTE_STR),
    }
}

/// Inner text of a field that both starts and ends with a quote
pub fn strip_outer_quotes(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 && bytes[0] == QUOTE && bytes[bytes.len() - 1] == QUOTE {
        Some(&raw[1..raw.len() - 1])
    } else {
        None
    }
}

/// Index of the quote closing the span opened at `open`.
///
/// With `escapes` set, a doubled quote inside the span is skipped as one
/// literal quote. Returns `None` for an unterminated span.
pub fn closing_quote(bytes: &[u8], open: usize, escapes: bool) -> Option<usize> {
    let mut index = open + 1;
    while index < bytes.len() {
        if bytes[index] == QUOTE {
            if escapes && bytes.get(index + 1) == Some(&QUOTE) {
                index += 2;
                continue;
            }
            return Some(index);
        }
        index += 1;
    }
    None
}

/// Index of the next separator at or after `from`, or the line length
pub fn next_separator(bytes: &[u8], from: usize, separator: u8) -> usize {
    bytes[from..]
        .iter()
        .position(|&byte| byte == separator)
        .map_or(bytes.len(), |offset| from + offset)
}

/// Drop empty fields from the end of a row
pub fn strip_trailing_empty(fields: &mut Vec<String>) {
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
}
