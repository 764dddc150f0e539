//! Naive strategy: split on the separator and nothing else.
//!
//! Quotes carry no meaning while splitting, so a quoted field containing the
//! separator comes apart.

use super::field::normalize_field;
use crate::models::RawRow;

pub(super) fn tokenize(line: &str, separator: u8) -> RawRow {
    line.split(char::from(separator))
        .map(normalize_field)
        .collect()
}
