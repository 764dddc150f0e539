//! Alternative escape-aware strategy with line-anchored empty fields.
//!
//! Quoted fields follow the same `""` escape grammar as the default
//! strategy, but a field match may only be empty when it is anchored at the
//! start of the line. Empty fields after a separator are skipped, so runs of
//! separators collapse (`Alice,,23` gives two fields), and every trailing
//! empty field is stripped.

use super::field::{closing_quote, next_separator, normalize_field, strip_trailing_empty};
use crate::constants::QUOTE;
use crate::models::RawRow;

pub(super) fn tokenize(line: &str, separator: u8) -> RawRow {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;

    loop {
        let end = if bytes.get(start) == Some(&QUOTE) {
            match closing_quote(bytes, start, true) {
                Some(close) => next_separator(bytes, close + 1, separator),
                None => bytes.len(),
            }
        } else {
            next_separator(bytes, start, separator)
        };

        // A quoted empty field (`""`) is a non-empty match and survives
        if start == 0 || end > start {
            fields.push(normalize_field(&line[start..end]));
        }

        if end + 1 >= bytes.len() {
            break;
        }
        start = end + 1;
    }

    strip_trailing_empty(&mut fields);
    fields
}
