//! Field metadata types
//!
//! Tags and per-field metadata read by the column resolver and the
//! value converter.

use crate::error::{Error, Result};
use crate::types::FieldKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Tags
// ============================================================================

/// Optional per-field tags controlling column lookup and date parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTags {
    /// Header name to look up (case-insensitive) when a header row is present
    pub header: Option<String>,

    /// Explicit zero-based column index, kept as written so that malformed
    /// tags surface as metadata errors
    pub index: Option<String>,

    /// chrono `strftime` pattern for date-time fields
    pub date_format: Option<String>,
}

impl FieldTags {
    /// Create an empty tag set (column chosen by declaration order)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header name tag
    #[must_use]
    pub fn header(mut self, name: impl Into<String>) -> Self {
        self.header = Some(name.into());
        self
    }

    /// Set the explicit index tag from its textual form
    #[must_use]
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Set the explicit index tag from a column number
    #[must_use]
    pub fn column(self, index: usize) -> Self {
        self.index(index.to_string())
    }

    /// Set the date format tag
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Header name tag, if set and non-empty
    pub fn header_name(&self) -> Option<&str> {
        self.header.as_deref().filter(|h| !h.is_empty())
    }

    /// Index tag, if set and non-empty
    pub fn index_tag(&self) -> Option<&str> {
        self.index.as_deref().filter(|i| !i.is_empty())
    }

    /// Date format tag, if set and non-empty
    pub fn date_pattern(&self) -> Option<&str> {
        self.date_format.as_deref().filter(|f| !f.is_empty())
    }
}

// ============================================================================
// Field Metadata
// ============================================================================

/// Name, declared type and tags of one record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    name: String,
    kind: FieldKind,
    tags: FieldTags,
}

impl FieldMeta {
    /// Create field metadata
    pub fn new(name: impl Into<String>, kind: FieldKind, tags: FieldTags) -> Self {
        Self {
            name: name.into(),
            kind,
            tags,
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Tags
    pub fn tags(&self) -> &FieldTags {
        &self.tags
    }

    /// Parse the explicit index tag, if any
    pub fn explicit_index(&self) -> Result<Option<usize>> {
        let Some(tag) = self.tags.index_tag() else {
            return Ok(None);
        };

        let index: i64 = tag.parse().map_err(|_| {
            Error::metadata(&self.name, format!("index tag '{tag}' is not an integer"))
        })?;

        usize::try_from(index)
            .map(Some)
            .map_err(|_| Error::metadata(&self.name, "index must be non-negative"))
    }

    /// Check that the tags are well-formed for this field
    pub fn validate(&self) -> Result<()> {
        self.explicit_index()?;

        if self.kind.requires_date_format() && self.tags.date_pattern().is_none() {
            return Err(Error::metadata(
                &self.name,
                "date-time field has no date format",
            ));
        }

        Ok(())
    }
}
