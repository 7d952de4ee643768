// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # csv-mapper
//!
//! Declarative mapping of delimited text rows into typed Rust records.
//!
//! A [`RecordShape`] lists the fields of a record type in declaration order,
//! each with a typed setter and optional tags (header name, explicit column
//! index, date format). The parser reads rows from a [`RowSource`] and fills
//! one record per non-empty row.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csv_mapper::{parse_file, FieldTags, ParseOptions, RecordShape};
//!
//! #[derive(Default)]
//! struct Contact {
//!     name: String,
//!     age: u8,
//!     email: String,
//! }
//!
//! let shape = RecordShape::<Contact>::builder()
//!     .field("name", |c: &mut Contact, v: String| c.name = v)
//!     .field("age", |c: &mut Contact, v: u8| c.age = v)
//!     .tagged("email", FieldTags::new().header("email"), |c: &mut Contact, v: String| c.email = v)
//!     .build();
//!
//! let options = ParseOptions::new().skip_first_line(true);
//! let contacts = parse_file("contacts.csv", &shape, &options)?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────────────────────┐     ┌──────────┐
//! │  RowSource  │────▶│              CsvParser               │────▶│  Vec<T>  │
//! │ (csv/memory)│     │ header → resolve → convert → assign  │     │          │
//! └─────────────┘     └──────────────────────────────────────┘     └──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Parse options
pub mod config;

/// Record shapes and field metadata
pub mod shape;

/// Row sources
pub mod source;

/// Column resolution, value conversion and row decoding
pub mod decode;

/// Parse driver
pub mod parser;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ParseOptions;
pub use error::{Error, Result};
pub use parser::{parse_file, parse_from_source, parse_reader, CsvParser};
pub use shape::{FieldSpec, FieldTags, FieldValue, RecordShape};
pub use source::{CsvRowSource, MemoryRowSource, RowSource};
pub use types::{CellValue, FieldKind, IntWidth, RawRow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
