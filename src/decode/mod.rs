//! Row decoder module
//!
//! Turns raw rows into records for a [`RecordShape`](crate::shape::RecordShape).
//!
//! # Overview
//!
//! The decode module provides:
//! - [`resolve_column`] - maps a field to its column index
//! - [`convert_cell`] - converts a cell to the field's declared type
//! - [`decode_row`] - assembles one record from one row

mod convert;
mod resolver;
mod row;
mod types;

pub use convert::convert_cell;
pub use resolver::resolve_column;
pub use row::decode_row;
pub use types::{ColumnBinding, Header, ResolvedColumn};
