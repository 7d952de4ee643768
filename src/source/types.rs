//! Row source trait
//!
//! # Overview
//!
//! A [`RowSource`] hands the parser one row of raw cells at a time:
//! - `Ok(Some(row))` - the next row, possibly with zero cells
//! - `Ok(None)` - end of input
//! - `Err(_)` - the input could not be read; the parse stops here
//!
//! Sources are consumed by the parse call. Pass `&mut source` to keep
//! using one afterwards.

use crate::error::Result;
use crate::types::RawRow;

/// Anything that yields delimited rows one at a time
pub trait RowSource {
    /// Read the next row
    ///
    /// Returns `Ok(None)` at end of input and `Err` on any other failure.
    fn read_row(&mut self) -> Result<Option<RawRow>>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn read_row(&mut self) -> Result<Option<RawRow>> {
        (**self).read_row()
    }
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    fn read_row(&mut self) -> Result<Option<RawRow>> {
        (**self).read_row()
    }
}
