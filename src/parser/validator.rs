//! Row validation against a schema
//!
//! Fail-fast: the first rejected row stops validation and is reported with
//! its position; rows already converted are discarded.

use tracing::debug;

use crate::error::{ParseError, RowIndex};
use crate::models::RawRow;
use crate::schema::RowSchema;

/// Validate one row, attributing a failure to `index`
pub fn validate_row<S: RowSchema>(
    schema: &S,
    row: RawRow,
    index: RowIndex,
) -> Result<S::Output, ParseError> {
    schema.validate(row).map_err(|issues| {
        debug!("Row {} rejected with {} issue(s)", index, issues.len());
        ParseError::validation(index, issues)
    })
}

/// Validate rows in order; indices are one-based among the rows given
pub fn validate_rows<S: RowSchema>(
    schema: &S,
    rows: Vec<RawRow>,
) -> Result<Vec<S::Output>, ParseError> {
    let mut records = Vec::with_capacity(rows.len());
    for (position, row) in rows.into_iter().enumerate() {
        records.push(validate_row(schema, row, RowIndex::Line(position + 1))?);
    }
    Ok(records)
}
