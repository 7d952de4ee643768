//! Error types for csv-mapper
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every variant is fatal to the parse call that produced it.

use crate::types::FieldKind;
use thiserror::Error;

/// The main error type for csv-mapper
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Source Errors
    // ============================================================================
    #[error("Failed to open '{path}': {source}")]
    SourceOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read row{}: {message}", line_suffix(.line))]
    Read { line: Option<u64>, message: String },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Invalid metadata for field '{field}': {message}")]
    Metadata { field: String, message: String },

    #[error("Trying to access column {index} for field '{field}', but the row has only {cells} column(s)")]
    MissingColumn {
        index: usize,
        field: String,
        cells: usize,
    },

    #[error("Cannot convert '{value}' to {target} for field '{field}': {message}")]
    Conversion {
        field: String,
        value: String,
        target: FieldKind,
        message: String,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a source open error
    pub fn source_open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a read error
    pub fn read(line: Option<u64>, message: impl Into<String>) -> Self {
        Self::Read {
            line,
            message: message.into(),
        }
    }

    /// Create a metadata error
    pub fn metadata(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Metadata {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(index: usize, field: impl Into<String>, cells: usize) -> Self {
        Self::MissingColumn {
            index,
            field: field.into(),
            cells,
        }
    }

    /// Create a conversion error
    pub fn conversion(
        field: impl Into<String>,
        value: impl Into<String>,
        target: FieldKind,
        message: impl Into<String>,
    ) -> Self {
        Self::Conversion {
            field: field.into(),
            value: value.into(),
            target,
            message: message.into(),
        }
    }

    /// Check if this error came from decoding a row against a record shape
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::Metadata { .. } | Error::MissingColumn { .. } | Error::Conversion { .. }
        )
    }

    /// Name of the record field involved, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Metadata { field, .. }
            | Error::MissingColumn { field, .. }
            | Error::Conversion { field, .. } => Some(field),
            _ => None,
        }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Result type alias for csv-mapper
pub type Result<T> = std::result::Result<T, Error>;
