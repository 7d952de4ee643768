//! Parse options
//!
//! Options can be built in code or loaded from YAML/JSON, e.g.:
//!
//! ```yaml
//! delimiter: ";"
//! skip_first_line: true
//! skip_empty_values: true
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Parse Options
// ============================================================================

/// Options controlling how rows are read and decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Column separator
    pub delimiter: char,

    /// Treat the first row as column header names
    pub skip_first_line: bool,

    /// Leave empty cells at the field's default value instead of converting them
    pub skip_empty_values: bool,

    /// Stop filling a record at the first missing column instead of failing
    pub allow_incomplete_rows: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_first_line: false,
            skip_empty_values: false,
            allow_incomplete_rows: false,
        }
    }
}

impl ParseOptions {
    /// Create options with default settings (comma separated, no header)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the column separator
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Treat the first row as a header
    #[must_use]
    pub fn skip_first_line(mut self, skip: bool) -> Self {
        self.skip_first_line = skip;
        self
    }

    /// Leave empty cells unconverted
    #[must_use]
    pub fn skip_empty_values(mut self, skip: bool) -> Self {
        self.skip_empty_values = skip;
        self
    }

    /// Truncate records on short rows instead of failing
    #[must_use]
    pub fn allow_incomplete_rows(mut self, allow: bool) -> Self {
        self.allow_incomplete_rows = allow;
        self
    }

    /// Check the delimiter can separate columns
    pub fn validate_delimiter(&self) -> Result<()> {
        Self::check_delimiter(self.delimiter)
    }

    /// Any character except NUL, a quote, a line break or U+FFFD
    pub fn check_delimiter(delimiter: char) -> Result<()> {
        match delimiter {
            '\0' | '"' | '\r' | '\n' | char::REPLACEMENT_CHARACTER => Err(Error::config(format!(
                "invalid delimiter {delimiter:?}"
            ))),
            _ => Ok(()),
        }
    }
}
