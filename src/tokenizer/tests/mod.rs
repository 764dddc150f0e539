//! Test utilities for tokenizer strategy testing

use super::{Tokenizer, TokenizerStrategy};


/// Tokenize a line with the given strategy and default separator
pub fn fields(strategy: TokenizerStrategy, line: &str) -> Option<Vec<String>> {
    Tokenizer::new(strategy).tokenize(line)
}

/// Build an expected row from string literals
pub fn row(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|value| value.to_string()).collect())
}

/// Quote-free lines without empty fields
pub fn plain_lines() -> Vec<&'static str> {
    vec![
        "name,age",
        "Alice,23",
        "Charlie, 25",
        "single",
        "a,b,c,d,e,f",
        "  spaced out  ,tail",
        "x;y,z",
    ]
}
