//! Quote-aware strategy with doubled-quote escapes (the default).
//!
//! A quoted field runs to the first quote that is not part of a `""` pair,
//! then on to the next separator. A separator at the very end of the line
//! yields a trailing empty field. Trailing empty fields are stripped
//! afterwards, except that one is kept when the line ends in a bare
//! separator: `Alice,23,` keeps its final empty cell while `Alice,23,""`
//! does not.

use super::field::{closing_quote, next_separator, normalize_field, strip_trailing_empty};
use crate::constants::QUOTE;
use crate::models::RawRow;

pub(super) fn tokenize(line: &str, separator: u8) -> RawRow {
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut bare_trailing_separator = false;
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

        fields.push(normalize_field(&line[start..end]));
        if end >= bytes.len() {
            break;
        }

        start = end + 1;
        if start == bytes.len() {
            fields.push(String::new());
            bare_trailing_separator = true;
            break;
        }
    }

    strip_trailing_empty(&mut fields);
    if bare_trailing_separator && !fields.is_empty() {
        fields.push(String::new());
    }
    fields
}
