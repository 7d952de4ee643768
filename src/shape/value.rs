//! Native field types
//!
//! [`FieldValue`] ties a Rust type to its [`FieldKind`] and unpacks the
//! converted [`CellValue`] into it.

use crate::types::{CellValue, FieldKind, IntWidth};
use chrono::{NaiveDate, NaiveDateTime};

/// A Rust type that a record field can hold
pub trait FieldValue: Sized {
    /// Declared type used to convert cells for this field
    const KIND: FieldKind;

    /// Unpack a converted cell, `None` if it does not fit
    fn from_cell(value: CellValue) -> Option<Self>;
}

macro_rules! impl_unsigned {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Unsigned(IntWidth::$width);

                fn from_cell(value: CellValue) -> Option<Self> {
                    match value {
                        CellValue::Unsigned(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Signed(IntWidth::$width);

                fn from_cell(value: CellValue) -> Option<Self> {
                    match value {
                        CellValue::Signed(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_unsigned!(u8 => W8, u16 => W16, u32 => W32, u64 => W64, usize => W64);
impl_signed!(i8 => W8, i16 => W16, i32 => W32, i64 => W64, isize => W64);

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for f32 {
    const KIND: FieldKind = FieldKind::Float32;

    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::Float32(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    const KIND: FieldKind = FieldKind::Float64;

    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::Float64(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for NaiveDateTime {
    const KIND: FieldKind = FieldKind::DateTime;

    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::DateTime(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for NaiveDate {
    const KIND: FieldKind = FieldKind::DateTime;

    fn from_cell(value: CellValue) -> Option<Self> {
        match value {
            CellValue::DateTime(v) => Some(v.date()),
            _ => None,
        }
    }
}

/// Optional fields stay `None` when the cell is skipped
impl<V: FieldValue> FieldValue for Option<V> {
    const KIND: FieldKind = V::KIND;

    fn from_cell(value: CellValue) -> Option<Self> {
        V::from_cell(value).map(Some)
    }
}
