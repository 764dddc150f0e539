//! Row validation capability
//!
//! A schema turns the fields of one row into a typed value or reports the
//! issues it found. The parser only depends on the [`RowSchema`] trait, so
//! a declarative [`ColumnSchema`], a closure wrapped with [`from_fn`] or any
//! hand-written type can be plugged in.
//!
//! [`Passthrough`] is the "no schema" case: rows come out exactly as the
//! tokenizer produced them.

pub mod columns;

pub use columns::{ColumnSchema, ColumnType};

use crate::models::{RawRow, ValidationIssue};

/// Converts raw fields into a typed record
pub trait RowSchema {
    type Output;

    /// Validate one row, consuming its fields
    fn validate(&self, fields: RawRow) -> Result<Self::Output, Vec<ValidationIssue>>;
}

impl<S: RowSchema + ?Sized> RowSchema for &S {
    type Output = S::Output;

    fn validate(&self, fields: RawRow) -> Result<Self::Output, Vec<ValidationIssue>> {
        (**self).validate(fields)
    }
}

/// No-op schema returning rows unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl RowSchema for Passthrough {
    type Output = RawRow;

    fn validate(&self, fields: RawRow) -> Result<RawRow, Vec<ValidationIssue>> {
        Ok(fields)
    }
}

/// Schema backed by a validation function
#[derive(Clone, Copy)]
pub struct FnSchema<F> {
    validator: F,
}

impl<F> std::fmt::Debug for FnSchema<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSchema").finish_non_exhaustive()
    }
}

impl<F, T> RowSchema for FnSchema<F>
where
    F: Fn(&[String]) -> Result<T, Vec<ValidationIssue>>,
{
    type Output = T;

    fn validate(&self, fields: RawRow) -> Result<T, Vec<ValidationIssue>> {
        (self.validator)(&fields)
    }
}

/// Wrap a validation function as a [`RowSchema`]
///
/// ```rust
/// use rowparse::models::ValidationIssue;
/// use rowparse::schema::{from_fn, RowSchema};
///
/// let ages = from_fn(|fields: &[String]| {
///     fields[1]
///         .parse::<u32>()
///         .map_err(|e| vec![ValidationIssue::custom(e.to_string()).at_column(1)])
/// });
///
/// assert_eq!(ages.validate(vec!["Nim".into(), "22".into()]), Ok(22));
/// assert!(ages.validate(vec!["Bob".into(), "thirty".into()]).is_err());
/// ```
pub fn from_fn<F, T>(validator: F) -> FnSchema<F>
where
    F: Fn(&[String]) -> Result<T, Vec<ValidationIssue>>,
{
    FnSchema { validator }
}
