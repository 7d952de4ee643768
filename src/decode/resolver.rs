//! Column resolution
//!
//! Rules, first match wins:
//! 1. header name tag found in the header row
//! 2. explicit index tag
//! 3. declaration order
//!
//! Resolution is pure; the decoder repeats it for every row.

use super::types::{ColumnBinding, Header, ResolvedColumn};
use crate::error::Result;
use crate::shape::FieldMeta;

/// Resolve the column feeding a field declared at `position`
pub fn resolve_column(position: usize, meta: &FieldMeta, header: &Header) -> Result<ResolvedColumn> {
    if let Some(index) = meta
        .tags()
        .header_name()
        .and_then(|name| header.position(name))
    {
        return Ok(ResolvedColumn::new(index, ColumnBinding::Header));
    }

    Ok(match meta.explicit_index()? {
        Some(index) => ResolvedColumn::new(index, ColumnBinding::Index),
        None => ResolvedColumn::new(position, ColumnBinding::Position),
    })
}
