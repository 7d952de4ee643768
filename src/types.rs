//! Common types used throughout csv-mapper
//!
//! This module contains the closed set of declared field types, the
//! converted cell values, and the raw row alias shared by the source,
//! decode and shape modules.

use chrono::NaiveDateTime;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// One input line split into cells
pub type RawRow = Vec<String>;

// ============================================================================
// Integer Width
// ============================================================================

/// Bit width of an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// Number of bits
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// Largest unsigned value representable at this width
    pub fn unsigned_max(self) -> u64 {
        match self {
            IntWidth::W8 => u64::from(u8::MAX),
            IntWidth::W16 => u64::from(u16::MAX),
            IntWidth::W32 => u64::from(u32::MAX),
            IntWidth::W64 => u64::MAX,
        }
    }

    /// Inclusive signed range representable at this width
    pub fn signed_range(self) -> (i64, i64) {
        match self {
            IntWidth::W8 => (i64::from(i8::MIN), i64::from(i8::MAX)),
            IntWidth::W16 => (i64::from(i16::MIN), i64::from(i16::MAX)),
            IntWidth::W32 => (i64::from(i32::MIN), i64::from(i32::MAX)),
            IntWidth::W64 => (i64::MIN, i64::MAX),
        }
    }
}

// ============================================================================
// Field Kind
// ============================================================================

/// Declared type of a record field
///
/// Conversion is dispatched on this enum with exhaustive matching, so a new
/// kind cannot be added without a conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Unsigned(IntWidth),
    Signed(IntWidth),
    Float32,
    Float64,
    String,
    DateTime,
}

impl FieldKind {
    /// Whether fields of this kind need a date format tag
    pub fn requires_date_format(self) -> bool {
        matches!(self, FieldKind::DateTime)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::Unsigned(width) => write!(f, "u{}", width.bits()),
            FieldKind::Signed(width) => write!(f, "i{}", width.bits()),
            FieldKind::Float32 => write!(f, "f32"),
            FieldKind::Float64 => write!(f, "f64"),
            FieldKind::String => write!(f, "string"),
            FieldKind::DateTime => write!(f, "date-time"),
        }
    }
}

// ============================================================================
// Cell Value
// ============================================================================

/// A cell converted to its field's declared type
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    DateTime(NaiveDateTime),
}
