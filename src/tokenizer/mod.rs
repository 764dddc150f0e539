//! Line-to-fields tokenizer
//!
//! Converts one text line into an ordered sequence of field strings. Four
//! interchangeable strategies cover different points of the quoting
//! trade-off and are kept side by side so their behaviour can be compared:
//!
//! - [`TokenizerStrategy::Naive`] - split on the separator only
//! - [`TokenizerStrategy::Quoted`] - quoted spans protect separators, no escapes
//! - [`TokenizerStrategy::Escaped`] - quoted spans with `""` escapes (default)
//! - [`TokenizerStrategy::Anchored`] - escape-aware, empty fields only at line start
//!
//! Every strategy runs extracted fields through [`field::normalize_field`].
//! Blank lines, and rows left with no fields, produce no row at all.
//!
//! ## Usage
//!
//! ```rust
//! use rowparse::tokenizer::{Tokenizer, TokenizerStrategy};
//!
//! let tokenizer = Tokenizer::new(TokenizerStrategy::Escaped);
//! assert_eq!(
//!     tokenizer.tokenize(r#""A, B",1"#),
//!     Some(vec!["A, B".to_string(), "1".to_string()])
//! );
//! assert_eq!(tokenizer.tokenize("   "), None);
//! ```

mod anchored;
mod escaped;
pub mod field;
mod naive;
mod quoted;

#[cfg(test)]
pub mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_SEPARATOR, QUOTE};
use crate::error::{Result, RowparseError};
use crate::models::RawRow;

/// Quoting policy used to split a line into fields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerStrategy {
    /// Split on the separator; quoted separators break fields apart
    Naive,
    /// Quote-aware without escapes; an inner quote ends the quoted span
    Quoted,
    /// Quote-aware with doubled-quote escapes; keeps one empty field for a trailing separator
    #[default]
    Escaped,
    /// Escape-aware, but empty fields are only kept at the start of the line
    Anchored,
}

impl TokenizerStrategy {
    /// All strategies, in increasing order of quoting support
    pub const ALL: [TokenizerStrategy; 4] = [Self::Naive, Self::Quoted, Self::Escaped, Self::Anchored];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Quoted => "quoted",
            Self::Escaped => "escaped",
            Self::Anchored => "anchored",
        }
    }
}

impl fmt::Display for TokenizerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenizerStrategy {
    type Err = RowparseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                RowparseError::configuration(format!(
                    "Unknown tokenizer strategy '{}'. Available strategies: naive, quoted, escaped, anchored",
                    wanted
                ))
            })
    }
}

/// Check that `separator` can split UTF-8 text unambiguously.
///
/// It must be ASCII, so it never falls inside a multi-byte character, and
/// it cannot be the quote or a line ending.
pub fn validate_separator(separator: u8) -> Result<()> {
    if !separator.is_ascii() {
        return Err(RowparseError::configuration(format!(
            "Separator must be a single ASCII character, got byte 0x{:02x}",
            separator
        )));
    }

    if separator == QUOTE || separator == b'\n' || separator == b'\r' {
        return Err(RowparseError::configuration(format!(
            "Separator cannot be {:?}",
            char::from(separator)
        )));
    }

    Ok(())
}

/// Splits lines into [`RawRow`]s with a fixed strategy and separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    strategy: TokenizerStrategy,
    separator: u8,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerStrategy::default())
    }
}

impl Tokenizer {
    /// Create a tokenizer using the default separator
    pub fn new(strategy: TokenizerStrategy) -> Self {
        Self {
            strategy,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Use a different single-byte separator, rejecting any that
    /// [`validate_separator`] refuses
    pub fn with_separator(mut self, separator: u8) -> Result<Self> {
        validate_separator(separator)?;
        self.separator = separator;
        Ok(self)
    }

    pub fn strategy(&self) -> TokenizerStrategy {
        self.strategy
    }

    pub fn separator(&self) -> u8 {
        self.separator
    }

    /// Tokenize one line, or `None` when the line contributes no row
    pub fn tokenize(&self, line: &str) -> Option<RawRow> {
        if line.trim().is_empty() {
            return None;
        }

        let fields = match self.strategy {
            TokenizerStrategy::Naive => naive::tokenize(line, self.separator),
            TokenizerStrategy::Quoted => quoted::tokenize(line, self.separator),
            TokenizerStrategy::Escaped => escaped::tokenize(line, self.separator),
            TokenizerStrategy::Anchored => anchored::tokenize(line, self.separator),
        };

        if fields.is_empty() { None } else { Some(fields) }
    }
}
