//! Row decoding
//!
//! Builds one record from one raw row.

use super::convert::convert_cell;
use super::resolver::resolve_column;
use super::types::Header;
use crate::config::ParseOptions;
use crate::error::{Error, Result};
use crate::shape::RecordShape;
use tracing::trace;

/// Decode one row into a new record
///
/// Fields are filled in declaration order. With `allow_incomplete_rows`,
/// the first field whose column lies past the end of the row stops the
/// record: that field and every later one keep their default value, even
/// if a later field's own column exists.
pub fn decode_row<T: Default>(
    shape: &RecordShape<T>,
    header: &Header,
    row: &[String],
    options: &ParseOptions,
) -> Result<T> {
    let mut record = T::default();

    for (position, field) in shape.fields().iter().enumerate() {
        let meta = field.meta();
        let column = resolve_column(position, meta, header)?;

        let Some(raw) = row.get(column.index) else {
            if options.allow_incomplete_rows {
                trace!(
                    field = meta.name(),
                    column = column.index,
                    cells = row.len(),
                    "Incomplete row, leaving remaining fields at default"
                );
                break;
            }
            return Err(Error::missing_column(column.index, meta.name(), row.len()));
        };

        if raw.is_empty() && options.skip_empty_values {
            continue;
        }

        let value = convert_cell(raw, meta)?;
        if !field.assign(&mut record, value) {
            return Err(Error::conversion(
                meta.name(),
                raw.as_str(),
                meta.kind(),
                "value does not fit the field's type",
            ));
        }
    }

    Ok(record)
}
