//! Configuration management and validation.
//!
//! [`ParseOptions`] is what the parser consumes: a schema, header handling,
//! the tokenizer strategy and the separator. [`ParserConfig`] is the
//! serializable, layered form used by the command line tool
//! (defaults -> YAML file -> environment -> CLI flags).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_HAS_HEADER, DEFAULT_SEPARATOR, ENV_COLUMNS,
    ENV_HAS_HEADER, ENV_SEPARATOR, ENV_STRATEGY,
};
use crate::error::{Result, RowparseError};
use crate::schema::{ColumnSchema, Passthrough, RowSchema};
use crate::tokenizer::{Tokenizer, TokenizerStrategy, validate_separator};

/// Options for a single parse invocation
#[derive(Debug, Clone)]
pub struct ParseOptions<S = Passthrough> {
    /// Validation capability; [`Passthrough`] returns raw rows
    pub schema: S,

    /// Consume the first row as the header
    pub has_header: bool,

    /// Quoting policy for splitting lines
    pub tokenizer_strategy: TokenizerStrategy,

    /// Single ASCII field separator
    pub separator: u8,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            schema: Passthrough,
            has_header: DEFAULT_HAS_HEADER,
            tokenizer_strategy: TokenizerStrategy::default(),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl ParseOptions {
    /// Default options producing raw rows
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> ParseOptions<S> {
    /// Replace the schema, changing the record type
    pub fn with_schema<T: RowSchema>(self, schema: T) -> ParseOptions<T> {
        ParseOptions {
            schema,
            has_header: self.has_header,
            tokenizer_strategy: self.tokenizer_strategy,
            separator: self.separator,
        }
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_strategy(mut self, strategy: TokenizerStrategy) -> Self {
        self.tokenizer_strategy = strategy;
        self
    }

    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Tokenizer configured from these options; fails on an unusable separator
    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Tokenizer::new(self.tokenizer_strategy).with_separator(self.separator)
    }

    /// Check that the separator can be tokenized unambiguously
    pub fn validate(&self) -> Result<()> {
        validate_separator(self.separator)
    }
}

/// Layered configuration for the command line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Treat the first row as a header
    pub has_header: bool,

    /// Tokenizer strategy
    pub strategy: TokenizerStrategy,

    /// Field separator
    pub separator: char,

    /// Declarative column schema, e.g. `name:text,age:number`
    pub columns: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            has_header: DEFAULT_HAS_HEADER,
            strategy: TokenizerStrategy::default(),
            separator: char::from(DEFAULT_SEPARATOR),
            columns: None,
        }
    }
}

impl ParserConfig {
    /// `<user config dir>/rowparse/config.yaml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RowparseError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|source| RowparseError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then the config file (explicit or default location), then environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let default_path = Self::default_config_path().filter(|path| path.exists());

        let mut config = match config_file.or(default_path.as_deref()) {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `ROWPARSE_*` overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_HAS_HEADER) {
            self.has_header = parse_bool(ENV_HAS_HEADER, &value)?;
        }

        if let Some(value) = lookup(ENV_STRATEGY) {
            self.strategy = value.parse()?;
        }

        if let Some(value) = lookup(ENV_SEPARATOR) {
            let mut chars = value.chars();
            self.separator = match (chars.next(), chars.next()) {
                (Some(separator), None) => separator,
                _ => {
                    return Err(RowparseError::configuration(format!(
                        "{} must be a single character, got '{}'",
                        ENV_SEPARATOR, value
                    )));
                }
            };
        }

        if let Some(value) = lookup(ENV_COLUMNS) {
            self.columns = Some(value).filter(|columns| !columns.trim().is_empty());
        }

        Ok(())
    }

    /// Separator as a byte, rejecting non-ASCII characters
    pub fn separator_byte(&self) -> Result<u8> {
        let separator = u8::try_from(self.separator).map_err(|_| {
            RowparseError::configuration(format!(
                "Separator must be a single ASCII character, got '{}'",
                self.separator
            ))
        })?;
        validate_separator(separator)?;
        Ok(separator)
    }

    /// Parsed column schema, when one is configured
    pub fn column_schema(&self) -> Result<Option<ColumnSchema>> {
        self.columns.as_deref().map(str::parse).transpose()
    }

    /// Validate every configured value
    pub fn validate(&self) -> Result<()> {
        self.separator_byte()?;
        self.column_schema()?;
        Ok(())
    }

    /// Parse options without a schema
    pub fn parse_options(&self) -> Result<ParseOptions> {
        let options = ParseOptions::new()
            .with_header(self.has_header)
            .with_strategy(self.strategy)
            .with_separator(self.separator_byte()?);
        Ok(options)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(RowparseError::configuration(format!(
            "{} must be true or false, got '{}'",
            key, value
        ))),
    }
}
