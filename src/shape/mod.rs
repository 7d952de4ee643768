//! Record shape module
//!
//! Describes how a record type maps onto delimited rows.
//!
//! # Overview
//!
//! A shape is built once per record type with [`RecordShape::builder`]. Each
//! field carries its declared type (taken from the setter's value type via
//! [`FieldValue`]), optional [`FieldTags`] and a setter closure. Nothing is
//! looked up by name or type at decode time.

mod record;
mod types;
mod value;

pub use record::{FieldSpec, RecordShape, RecordShapeBuilder};
pub use types::{FieldMeta, FieldTags};
pub use value::FieldValue;
