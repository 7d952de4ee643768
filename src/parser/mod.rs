//! Parse driver module
//!
//! Reads rows from a source and decodes them into records.
//!
//! # Overview
//!
//! The parser module provides:
//! - [`CsvParser`] - parser bound to a set of [`ParseOptions`]
//! - [`parse_file`], [`parse_reader`], [`parse_from_source`] - one-shot helpers
//!
//! A parse is all-or-nothing: the first error aborts it and no records are
//! returned. Sources are owned by the call and dropped on every exit path.

use crate::config::ParseOptions;
use crate::decode::{decode_row, Header};
use crate::error::Result;
use crate::shape::RecordShape;
use crate::source::{CsvRowSource, RowSource};
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Parser for delimited text into records
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    options: ParseOptions,
}

impl CsvParser {
    /// Create a parser with the given options
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parser options
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Open `path` and parse every row
    pub fn parse_file<T: Default>(
        &self,
        path: impl AsRef<Path>,
        shape: &RecordShape<T>,
    ) -> Result<Vec<T>> {
        let path = path.as_ref();
        debug!("Parsing file: {}", path.display());

        let source = CsvRowSource::open(path, &self.options)?;
        self.parse_from_source(source, shape)
    }

    /// Parse delimited text from any reader
    pub fn parse_reader<T: Default, R: Read>(
        &self,
        reader: R,
        shape: &RecordShape<T>,
    ) -> Result<Vec<T>> {
        let source = CsvRowSource::from_options(reader, &self.options)?;
        self.parse_from_source(source, shape)
    }

    /// Parse every row of `source`
    pub fn parse_from_source<T: Default, S: RowSource>(
        &self,
        mut source: S,
        shape: &RecordShape<T>,
    ) -> Result<Vec<T>> {
        shape.validate()?;

        debug!(
            fields = shape.len(),
            delimiter = ?self.options.delimiter,
            skip_first_line = self.options.skip_first_line,
            skip_empty_values = self.options.skip_empty_values,
            allow_incomplete_rows = self.options.allow_incomplete_rows,
            "Starting parse"
        );

        let header = if self.options.skip_first_line {
            read_header(&mut source)
        } else {
            Header::empty()
        };

        let plan = shape.resolve_columns(&header)?;
        trace!(?plan, "Resolved column plan");

        let mut records = Vec::new();
        let mut row_number: u64 = 0;

        while let Some(row) = source.read_row()? {
            row_number += 1;

            if row.is_empty() {
                trace!(row = row_number, "Skipping empty row");
                continue;
            }

            records.push(decode_row(shape, &header, &row, &self.options)?);
        }

        debug!(records = records.len(), rows = row_number, "Finished parse");
        Ok(records)
    }
}

/// Read the header row; a failed read leaves the header empty
fn read_header<S: RowSource>(source: &mut S) -> Header {
    match source.read_row() {
        Ok(Some(row)) => Header::from_row(row),
        Ok(None) => Header::empty(),
        Err(e) => {
            warn!("Failed to read header row, continuing without header: {e}");
            Header::empty()
        }
    }
}

/// Open `path` and parse every row with `options`
pub fn parse_file<T: Default>(
    path: impl AsRef<Path>,
    shape: &RecordShape<T>,
    options: &ParseOptions,
) -> Result<Vec<T>> {
    CsvParser::new(options.clone()).parse_file(path, shape)
}

/// Parse delimited text from any reader with `options`
pub fn parse_reader<T: Default, R: Read>(
    reader: R,
    shape: &RecordShape<T>,
    options: &ParseOptions,
) -> Result<Vec<T>> {
    CsvParser::new(options.clone()).parse_reader(reader, shape)
}

/// Parse every row of `source` with `options`
pub fn parse_from_source<T: Default, S: RowSource>(
    source: S,
    shape: &RecordShape<T>,
    options: &ParseOptions,
) -> Result<Vec<T>> {
    CsvParser::new(options.clone()).parse_from_source(source, shape)
}
