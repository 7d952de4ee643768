//! Delimited text source backed by the `csv` crate
//!
//! `csv::Reader` splits and unescapes byte records. The raw bytes of each
//! record also go through [`QuoteCheck`], and cells are decoded as UTF-8
//! here, after any multi-byte delimiter has been put back.

use super::input::{split_byte, TrackedInput, DELIMITER_BYTE};
use super::quotes::QuoteCheck;
use super::types::RowSource;
use crate::config::ParseOptions;
use crate::error::{Error, Result};
use crate::types::RawRow;
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Row source reading quoted, delimiter-separated text
///
/// Rows may have any number of cells; width checks belong to the decoder.
pub struct CsvRowSource<R: Read> {
    reader: csv::Reader<TrackedInput<R>>,
    record: ByteRecord,
    quotes: QuoteCheck,
    delimiter: char,
}

impl<R: Read> CsvRowSource<R> {
    /// Wrap a reader, splitting on `delimiter`
    pub fn new(reader: R, delimiter: char) -> Result<Self> {
        ParseOptions::check_delimiter(delimiter)?;

        let byte = split_byte(delimiter);
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(byte)
            .from_reader(TrackedInput::new(reader, delimiter));

        Ok(Self {
            reader,
            record: ByteRecord::new(),
            quotes: QuoteCheck::new(byte),
            delimiter,
        })
    }

    /// Wrap a reader using the delimiter from `options`
    pub fn from_options(reader: R, options: &ParseOptions) -> Result<Self> {
        Self::new(reader, options.delimiter)
    }
}

impl CsvRowSource<File> {
    /// Open a file
    pub fn open(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        options.validate_delimiter()?;
        let file =
            File::open(path).map_err(|e| Error::source_open(path.display().to_string(), e))?;
        Self::from_options(file, options)
    }
}

impl<R: Read> CsvRowSource<R> {
    /// Cells of the last record, with a quoted multi-byte delimiter restored
    fn cells(&self) -> Result<RawRow> {
        let line = self.record.position().map(csv::Position::line);
        let mut encoded = [0u8; 4];
        let delimiter = self.delimiter.encode_utf8(&mut encoded).as_bytes();

        self.record
            .iter()
            .map(|field| {
                let bytes = if self.delimiter.is_ascii() {
                    field.to_vec()
                } else {
                    restore_delimiter(field, delimiter)
                };
                String::from_utf8(bytes)
                    .map_err(|e| Error::read(line, format!("invalid UTF-8 in field: {e}")))
            })
            .collect()
    }
}

fn restore_delimiter(field: &[u8], delimiter: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(field.len());
    for &byte in field {
        if byte == DELIMITER_BYTE {
            bytes.extend_from_slice(delimiter);
        } else {
            bytes.push(byte);
        }
    }
    bytes
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn read_row(&mut self) -> Result<Option<RawRow>> {
        let read = self.reader.read_byte_record(&mut self.record);

        let end = self.reader.position().byte();
        let raw = self.reader.get_mut().take_until(end);
        self.quotes.feed(&raw)?;

        match read {
            Ok(true) => {
                self.quotes.check_closed()?;
                self.cells().map(Some)
            }
            Ok(false) => {
                self.quotes.check_closed()?;
                Ok(None)
            }
            Err(e) => Err(Error::read(e.position().map(csv::Position::line), e.to_string())),
        }
    }
}
