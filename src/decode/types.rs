//! Decoder types
//!
//! Header row and column resolution results.

use crate::types::RawRow;

// ============================================================================
// Header
// ============================================================================

/// Lower-cased column names taken from the first row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    /// A header with no columns (header lookup never matches)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a header from a raw row, lower-casing every cell
    pub fn from_row(row: RawRow) -> Self {
        Self {
            columns: row.into_iter().map(|cell| cell.to_lowercase()).collect(),
        }
    }

    /// Index of the column named `name` (case-insensitive)
    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.columns.iter().position(|column| *column == name)
    }

    /// Column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the header is absent or empty
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ============================================================================
// Column Resolution
// ============================================================================

/// Which rule picked a field's column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnBinding {
    /// Matched the header name tag against the header row
    Header,
    /// Explicit index tag
    Index,
    /// Field's position in the shape
    Position,
}

/// A field's resolved column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Zero-based column index
    pub index: usize,
    /// How the index was chosen
    pub binding: ColumnBinding,
}

impl ResolvedColumn {
    /// Create a resolved column
    pub fn new(index: usize, binding: ColumnBinding) -> Self {
        Self { index, binding }
    }
}
