//! Application constants for the rowparse library and CLI
//!
//! This module contains the delimiter and quoting characters, default
//! option values and configuration lookup names used throughout the crate.

// =============================================================================
// Delimited Text Syntax
// =============================================================================

/// Default field separator
pub const DEFAULT_SEPARATOR: u8 = b',';

/// Quote delimiter; doubled inside a quoted field it encodes one literal quote
pub const QUOTE: u8 = b'"';

/// Quote delimiter as a string slice
pub const QUOTE_STR: &str = "\"";

/// Escaped (doubled) quote sequence
pub const DOUBLED_QUOTE: &str = "\"\"";

// =============================================================================
// Parse Option Defaults
// =============================================================================

/// Whether the first row is treated as a header unless configured otherwise
pub const DEFAULT_HAS_HEADER: bool = true;

/// Message prefix for row validation failures
pub const VALIDATION_FAILED_MESSAGE: &str = "CSV row validation failed";

// =============================================================================
// Configuration Lookup
// =============================================================================

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "rowparse";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable overriding header extraction (`true`/`false`)
pub const ENV_HAS_HEADER: &str = "ROWPARSE_HAS_HEADER";

/// Environment variable overriding the tokenizer strategy
pub const ENV_STRATEGY: &str = "ROWPARSE_STRATEGY";

/// Environment variable overriding the field separator
pub const ENV_SEPARATOR: &str = "ROWPARSE_SEPARATOR";

/// Environment variable supplying a declarative column schema
pub const ENV_COLUMNS: &str = "ROWPARSE_COLUMNS";

/// Log target used to build the default tracing filter
pub const LOG_TARGET: &str = "rowparse";
